//! Encoder: turns chunked input into a stream of 3-byte tokens.
//!
//! Tokens accumulate in a staging buffer that is written to the output in
//! bulk whenever it cannot hold another token, and once more at the end of
//! input.

use std::io::{Read, Write};
use std::ops::ControlFlow;

use super::chunk::ChunkBuffer;
use super::index::MatchIndex;
use super::types::{try_alloc, Lz77Error, Token, MAX_WINDOW, TOKEN_SIZE};

/// Streaming LZ77 token writer.
pub struct LzWriter<W: Write> {
    output: W,
    stage: Vec<u8>,
    stage_pos: usize,
    window_size: usize,
    /// Total bytes handed to `output` so far.
    bytes_written: u64,
}

/// Checks a window size against the 16-bit offset field.
pub(crate) fn validate_window(window_size: usize) -> Result<(), Lz77Error> {
    if window_size == 0 {
        return Err(Lz77Error::InvalidArgument("window size must be non-zero"));
    }
    if window_size > MAX_WINDOW {
        return Err(Lz77Error::InvalidArgument("window size exceeds 65535 bytes"));
    }
    Ok(())
}

impl<W: Write> LzWriter<W> {
    /// Creates a writer staging up to `stage_capacity` bytes before each
    /// write to `output`.
    ///
    /// The stage must hold at least one token.
    pub fn open(output: W, stage_capacity: usize, window_size: usize) -> Result<Self, Lz77Error> {
        if stage_capacity < TOKEN_SIZE {
            return Err(Lz77Error::InvalidArgument("writer stage must hold at least one token"));
        }
        validate_window(window_size)?;
        Ok(LzWriter {
            output,
            stage: try_alloc(stage_capacity)?,
            stage_pos: 0,
            window_size,
            bytes_written: 0,
        })
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Bytes currently staged and not yet flushed.
    #[inline]
    pub fn staged(&self) -> usize {
        self.stage_pos
    }

    /// Total encoded bytes written to the output, excluding staged bytes.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    fn push_token(&mut self, token: Token) -> Result<(), Lz77Error> {
        if self.stage_pos + TOKEN_SIZE > self.stage.len() {
            self.flush()?;
        }
        self.stage[self.stage_pos..self.stage_pos + TOKEN_SIZE].copy_from_slice(&token.to_bytes());
        self.stage_pos += TOKEN_SIZE;
        Ok(())
    }

    /// Encodes one token at the chunk's read position.
    ///
    /// The position is recorded in `index` first, then the longest match is
    /// looked up.  Returns the number of source bytes the emitted token
    /// covers: the match length, or 1 for a literal.  The chunk position is
    /// not advanced; the caller does that with the returned count.
    pub fn emit_token(&mut self, index: &mut MatchIndex, chunk: &ChunkBuffer) -> Result<usize, Lz77Error> {
        let pos = chunk.pos();
        let literal = *chunk
            .data()
            .get(pos)
            .ok_or(Lz77Error::InvalidArgument("emit_token called on an exhausted chunk"))?;

        index.record(chunk, pos, self.window_size);
        match index.best_match(chunk, pos, self.window_size) {
            Some(m) => {
                self.push_token(m.token())?;
                Ok(m.length)
            }
            None => {
                self.push_token(Token::Literal(literal))?;
                Ok(1)
            }
        }
    }

    /// Writes every staged byte to the output and empties the stage.
    ///
    /// Returns the number of bytes written.  A short write surfaces as
    /// [`Lz77Error::Io`].
    pub fn flush(&mut self) -> Result<usize, Lz77Error> {
        let n = self.stage_pos;
        if n > 0 {
            self.output.write_all(&self.stage[..n])?;
            self.bytes_written += n as u64;
            self.stage_pos = 0;
        }
        Ok(n)
    }

    /// Encodes all of `input` read in chunks of `chunk_capacity` bytes.
    ///
    /// Returns the number of source bytes processed.
    pub fn run<R: Read + ?Sized>(&mut self, input: &mut R, chunk_capacity: usize) -> Result<u64, Lz77Error> {
        self.run_observed(input, chunk_capacity, |_| ControlFlow::Continue(()))
    }

    /// Like [`run`](Self::run), calling `observer` with the running source
    /// byte count after every chunk.
    ///
    /// Returning `ControlFlow::Break(())` stops between chunks: staged tokens
    /// are flushed, so the output is a valid encoding of the processed
    /// prefix, and the call fails with [`Lz77Error::Cancelled`].
    pub fn run_observed<R, F>(&mut self, input: &mut R, chunk_capacity: usize, mut observer: F) -> Result<u64, Lz77Error>
    where
        R: Read + ?Sized,
        F: FnMut(u64) -> ControlFlow<()>,
    {
        let mut index = MatchIndex::new()?;
        let mut chunk = ChunkBuffer::load_with_history(input, chunk_capacity, self.window_size)?;
        let mut processed: u64 = 0;

        while chunk.remaining() > 0 {
            while chunk.remaining() > 0 {
                let consumed = self.emit_token(&mut index, &chunk)?;
                chunk.advance(consumed);
                processed += consumed as u64;
            }
            if observer(processed).is_break() {
                self.flush()?;
                return Err(Lz77Error::Cancelled);
            }
            chunk.slide(input)?;
        }

        self.flush()?;
        self.output.flush()?;
        Ok(processed)
    }

    /// Flushes staged tokens and returns the underlying output.
    pub fn finish(mut self) -> Result<W, Lz77Error> {
        self.flush()?;
        self.output.flush()?;
        Ok(self.output)
    }
}
