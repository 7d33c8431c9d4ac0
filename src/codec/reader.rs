//! Decoder: expands a token stream back into the original bytes.
//!
//! Decoded bytes are pushed both into a staging buffer (flushed to the
//! output in bulk) and into a circular [`Dictionary`] holding the last
//! `window_size` bytes, which back-references are resolved against.

use std::io::{Read, Write};
use std::ops::ControlFlow;

use super::chunk::ChunkBuffer;
use super::types::{try_alloc, Lz77Error, Token, MIN_MATCH, TOKEN_SIZE};
use super::writer::validate_window;

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary
// ─────────────────────────────────────────────────────────────────────────────

/// Circular history of decoded bytes.
#[derive(Debug)]
pub struct Dictionary {
    data: Vec<u8>,
    /// Next write slot.
    pos: usize,
    /// Number of slots holding decoded bytes (saturates at capacity).
    filled: usize,
}

impl Dictionary {
    pub fn new(window_size: usize) -> Result<Self, Lz77Error> {
        validate_window(window_size)?;
        Ok(Dictionary { data: try_alloc(window_size)?, pos: 0, filled: 0 })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes a back-reference can currently reach.
    #[inline]
    pub fn available(&self) -> usize {
        self.filled
    }

    /// Appends a decoded byte, overwriting the oldest once full.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.data[self.pos] = byte;
        self.pos = (self.pos + 1) % self.data.len();
        if self.filled < self.data.len() {
            self.filled += 1;
        }
    }

    /// Byte written `distance` pushes ago (`1` is the most recent).
    ///
    /// Callers check `1 <= distance <= available()` first.
    #[inline]
    pub fn back(&self, distance: usize) -> u8 {
        let cap = self.data.len();
        self.data[(self.pos + cap - distance) % cap]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Streaming LZ77 token reader.
pub struct LzReader<W: Write> {
    output: W,
    stage: Vec<u8>,
    stage_pos: usize,
    dict: Dictionary,
    /// Total decoded bytes written to `output` so far.
    bytes_written: u64,
}

impl<W: Write> LzReader<W> {
    /// Creates a reader with a `stage_capacity`-byte output stage and a
    /// `window_size`-byte dictionary.
    pub fn open(output: W, stage_capacity: usize, window_size: usize) -> Result<Self, Lz77Error> {
        if stage_capacity == 0 {
            return Err(Lz77Error::InvalidArgument("reader stage must be non-zero"));
        }
        let dict = Dictionary::new(window_size)?;
        Ok(LzReader {
            output,
            stage: try_alloc(stage_capacity)?,
            stage_pos: 0,
            dict,
            bytes_written: 0,
        })
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.dict.capacity()
    }

    /// Decoded bytes currently staged and not yet flushed.
    #[inline]
    pub fn staged(&self) -> usize {
        self.stage_pos
    }

    /// Total decoded bytes written to the output, excluding staged bytes.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    #[inline]
    fn emit(&mut self, byte: u8) -> Result<(), Lz77Error> {
        if self.stage_pos == self.stage.len() {
            self.flush()?;
        }
        self.stage[self.stage_pos] = byte;
        self.stage_pos += 1;
        self.dict.push(byte);
        Ok(())
    }

    /// Decodes the token at the chunk's read position and advances past it.
    ///
    /// Returns the number of encoded bytes consumed (always [`TOKEN_SIZE`]).
    /// Fails with [`Lz77Error::TruncatedToken`] if fewer than three bytes
    /// remain, and rejects matches reaching outside the decoded history or
    /// shorter than [`MIN_MATCH`].
    pub fn decode_token(&mut self, chunk: &mut ChunkBuffer) -> Result<usize, Lz77Error> {
        let bytes: [u8; TOKEN_SIZE] = match chunk.unread().get(..TOKEN_SIZE) {
            Some(&[a, b, c]) => [a, b, c],
            _ => return Err(Lz77Error::TruncatedToken { remaining: chunk.remaining() }),
        };

        match Token::from_bytes(bytes) {
            Token::Literal(b) => {
                if self.stage_pos + 1 > self.stage.len() {
                    self.flush()?;
                }
                self.emit(b)?;
            }
            Token::Match { distance, length } => {
                let distance = distance as usize;
                let length = length as usize;
                if length < MIN_MATCH {
                    return Err(Lz77Error::InvalidLength(length as u8));
                }
                if distance > self.dict.available() {
                    return Err(Lz77Error::InvalidDistance {
                        distance,
                        available: self.dict.available(),
                    });
                }
                if self.stage_pos + length > self.stage.len() {
                    self.flush()?;
                }
                // Byte-at-a-time so a run can copy bytes it has just produced.
                for _ in 0..length {
                    let b = self.dict.back(distance);
                    self.emit(b)?;
                }
            }
        }

        chunk.advance(TOKEN_SIZE);
        Ok(TOKEN_SIZE)
    }

    /// Writes every staged byte to the output and empties the stage.
    pub fn flush(&mut self) -> Result<usize, Lz77Error> {
        let n = self.stage_pos;
        if n > 0 {
            self.output.write_all(&self.stage[..n])?;
            self.bytes_written += n as u64;
            self.stage_pos = 0;
        }
        Ok(n)
    }

    /// Decodes all of `input`, read in chunks of `chunk_capacity` bytes.
    ///
    /// Returns the number of encoded bytes consumed.
    pub fn run<R: Read + ?Sized>(&mut self, input: &mut R, chunk_capacity: usize) -> Result<u64, Lz77Error> {
        self.run_observed(input, chunk_capacity, |_| ControlFlow::Continue(()))
    }

    /// Like [`run`](Self::run), calling `observer` with the running encoded
    /// byte count after every chunk.
    ///
    /// A token split by a chunk boundary is carried to the front of the next
    /// chunk, so tokens are never decoded from two separate loads.  If the
    /// stream ends with one or two bytes left over, the call fails with
    /// [`Lz77Error::TruncatedToken`] after flushing everything decoded
    /// before it.
    pub fn run_observed<R, F>(&mut self, input: &mut R, chunk_capacity: usize, mut observer: F) -> Result<u64, Lz77Error>
    where
        R: Read + ?Sized,
        F: FnMut(u64) -> ControlFlow<()>,
    {
        if chunk_capacity < TOKEN_SIZE {
            return Err(Lz77Error::InvalidArgument("reader chunk must hold at least one token"));
        }
        let mut chunk = ChunkBuffer::load(input, chunk_capacity)?;
        let mut processed: u64 = 0;

        loop {
            while chunk.remaining() >= TOKEN_SIZE {
                processed += self.decode_token(&mut chunk)? as u64;
            }
            if observer(processed).is_break() {
                self.flush()?;
                return Err(Lz77Error::Cancelled);
            }
            let leftover = chunk.remaining();
            if chunk.slide(input)? == 0 {
                if leftover > 0 {
                    self.flush()?;
                    return Err(Lz77Error::TruncatedToken { remaining: leftover });
                }
                break;
            }
        }

        self.flush()?;
        self.output.flush()?;
        Ok(processed)
    }

    /// Flushes staged bytes and returns the underlying output.
    pub fn finish(mut self) -> Result<W, Lz77Error> {
        self.flush()?;
        self.output.flush()?;
        Ok(self.output)
    }
}
