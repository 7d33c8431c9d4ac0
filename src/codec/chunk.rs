//! Chunk reader: a fixed-capacity byte arena refilled from an input stream.
//!
//! The arena is split into an optional *history* region (bytes already
//! consumed but still addressable, so the match finder can look back across
//! refills) followed by up to `capacity` freshly read bytes.
//!
//! ```text
//!  0          pos - history      pos                 size        data.len()
//!  |  dropped  |    history      |   unread ...      |   free     |
//! ```
//!
//! Positions handed to the match index are *absolute* stream offsets
//! (`base + arena index`), so they stay meaningful after the arena slides.

use std::io::{self, Read};

use super::types::{try_alloc, Lz77Error};

/// Refillable input arena.  Single owner, not shared between calls.
#[derive(Debug)]
pub struct ChunkBuffer {
    data: Vec<u8>,
    /// Maximum number of fresh bytes read per refill.
    capacity: usize,
    /// Maximum number of consumed bytes kept addressable across a slide.
    history: usize,
    /// Number of valid bytes in `data`.
    size: usize,
    /// Next unread index.
    pos: usize,
    /// Absolute stream offset of `data[0]`.
    base: u64,
}

/// Reads into `buf` until it is full or the stream reports end of input.
///
/// Returns the number of bytes read; fewer than `buf.len()` means EOF.
fn read_full<R: Read + ?Sized>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match input.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

impl ChunkBuffer {
    /// Allocates a `capacity`-byte chunk with no history and performs the
    /// initial fill.  `size()` reports how many bytes were read.
    pub fn load<R: Read + ?Sized>(input: &mut R, capacity: usize) -> Result<Self, Lz77Error> {
        Self::load_with_history(input, capacity, 0)
    }

    /// Like [`load`](Self::load) but reserves room to keep up to `history`
    /// consumed bytes addressable when the arena slides.
    pub fn load_with_history<R: Read + ?Sized>(
        input: &mut R,
        capacity: usize,
        history: usize,
    ) -> Result<Self, Lz77Error> {
        if capacity == 0 {
            return Err(Lz77Error::InvalidArgument("chunk capacity must be non-zero"));
        }
        let total = capacity
            .checked_add(history)
            .ok_or(Lz77Error::AllocationError { requested: usize::MAX })?;
        let mut chunk = ChunkBuffer {
            data: try_alloc(total)?,
            capacity,
            history,
            size: 0,
            pos: 0,
            base: 0,
        };
        chunk.size = read_full(input, &mut chunk.data[..capacity])?;
        Ok(chunk)
    }

    /// Discards every byte, consumed or not, and reads up to `capacity`
    /// fresh bytes at index 0.  Returns 0 at end of stream.
    ///
    /// Indices into the previous load are invalid afterwards.
    pub fn refill<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<usize, Lz77Error> {
        self.base += self.size as u64;
        self.pos = 0;
        self.size = read_full(input, &mut self.data[..self.capacity])?;
        Ok(self.size)
    }

    /// Moves the retained region to the front of the arena and reads fresh
    /// bytes behind it.
    ///
    /// The retained region is every unread byte plus up to `history` bytes
    /// immediately before the read position.  Returns the number of fresh
    /// bytes read; 0 means the stream is exhausted.
    pub fn slide<R: Read + ?Sized>(&mut self, input: &mut R) -> Result<usize, Lz77Error> {
        let keep_history = self.pos.min(self.history);
        let start = self.pos - keep_history;
        let retained = self.size - start;
        if start > 0 {
            self.data.copy_within(start..self.size, 0);
            self.base += start as u64;
        }
        self.pos = keep_history;
        self.size = retained;
        let room = (self.data.len() - self.size).min(self.capacity);
        let fresh = read_full(input, &mut self.data[self.size..self.size + room])?;
        self.size += fresh;
        Ok(fresh)
    }

    /// Bytes left between the read position and the end of valid data.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.size - self.pos
    }

    /// Advances the read position by `n` bytes, clamped to the valid size.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.size);
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All currently valid bytes, history included.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// The unread bytes.
    #[inline]
    pub fn unread(&self) -> &[u8] {
        &self.data[self.pos..self.size]
    }

    /// Absolute stream offset of arena index `idx`.
    #[inline]
    pub fn absolute(&self, idx: usize) -> u64 {
        self.base + idx as u64
    }

    /// Maps an absolute stream offset back to an arena index, or `None` if
    /// the byte has already slid out of the arena or is not loaded yet.
    #[inline]
    pub fn index_of(&self, abs: u64) -> Option<usize> {
        let idx = abs.checked_sub(self.base)?;
        if idx < self.size as u64 {
            Some(idx as usize)
        } else {
            None
        }
    }
}
