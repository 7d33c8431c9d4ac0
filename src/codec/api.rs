//! Core entry points: stream-to-stream compression and decompression.
//!
//! Both directions must be driven with the same `window_size`; it is not
//! recorded in the encoded stream.

use std::io::{Cursor, Read, Write};
use std::ops::ControlFlow;

use super::reader::LzReader;
use super::types::Lz77Error;
use super::writer::LzWriter;
use crate::config::{COMPRESSED_BUFFER_SIZE, DECOMPRESSED_BUFFER_SIZE, WINDOW_SIZE};

/// Buffer and window sizes for one encode or decode call.
///
/// The defaults match the tool's defaults.  Compression stages 2 KiB of
/// tokens and reads 4 KiB chunks; decompression reads 2 KiB token chunks
/// and stages 4 KiB of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecParams {
    /// Encoder staging buffer (bytes of tokens).
    pub compress_stage_size: usize,
    /// Encoder input chunk size.
    pub compress_chunk_size: usize,
    /// Decoder staging buffer (bytes of decoded output).
    pub decompress_stage_size: usize,
    /// Decoder input chunk size (bytes of tokens).
    pub decompress_chunk_size: usize,
    /// Sliding window / dictionary size.
    pub window_size: usize,
}

impl Default for CodecParams {
    fn default() -> Self {
        CodecParams {
            compress_stage_size: COMPRESSED_BUFFER_SIZE,
            compress_chunk_size: DECOMPRESSED_BUFFER_SIZE,
            decompress_stage_size: DECOMPRESSED_BUFFER_SIZE,
            decompress_chunk_size: COMPRESSED_BUFFER_SIZE,
            window_size: WINDOW_SIZE,
        }
    }
}

impl CodecParams {
    /// Default sizes with a custom window.
    pub fn with_window(window_size: usize) -> Self {
        CodecParams { window_size, ..Self::default() }
    }
}

/// Byte counts reported by a finished call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecStats {
    /// Bytes consumed from the input stream.
    pub bytes_in: u64,
    /// Bytes written to the output stream.
    pub bytes_out: u64,
}

/// Compresses `input` into `output`.
///
/// `writer_stage_size` bounds the encoder's token stage, `reader_chunk_size`
/// the input chunk.
pub fn compress<R, W>(
    input: &mut R,
    output: &mut W,
    writer_stage_size: usize,
    reader_chunk_size: usize,
    window_size: usize,
) -> Result<CodecStats, Lz77Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    compress_observed(input, output, writer_stage_size, reader_chunk_size, window_size, |_| {
        ControlFlow::Continue(())
    })
}

/// [`compress`] with a per-chunk observer (see [`LzWriter::run_observed`]).
pub fn compress_observed<R, W, F>(
    input: &mut R,
    output: &mut W,
    writer_stage_size: usize,
    reader_chunk_size: usize,
    window_size: usize,
    observer: F,
) -> Result<CodecStats, Lz77Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnMut(u64) -> ControlFlow<()>,
{
    let mut writer = LzWriter::open(output, writer_stage_size, window_size)?;
    let bytes_in = writer.run_observed(input, reader_chunk_size, observer)?;
    Ok(CodecStats { bytes_in, bytes_out: writer.bytes_written() })
}

/// Decompresses `input` into `output`.
///
/// `reader_stage_size` bounds the decoder's output stage,
/// `writer_chunk_size` the chunk of tokens read at a time.
pub fn decompress<R, W>(
    input: &mut R,
    output: &mut W,
    reader_stage_size: usize,
    writer_chunk_size: usize,
    window_size: usize,
) -> Result<CodecStats, Lz77Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    decompress_observed(input, output, reader_stage_size, writer_chunk_size, window_size, |_| {
        ControlFlow::Continue(())
    })
}

/// [`decompress`] with a per-chunk observer (see [`LzReader::run_observed`]).
pub fn decompress_observed<R, W, F>(
    input: &mut R,
    output: &mut W,
    reader_stage_size: usize,
    writer_chunk_size: usize,
    window_size: usize,
    observer: F,
) -> Result<CodecStats, Lz77Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnMut(u64) -> ControlFlow<()>,
{
    let mut reader = LzReader::open(output, reader_stage_size, window_size)?;
    let bytes_in = reader.run_observed(input, writer_chunk_size, observer)?;
    Ok(CodecStats { bytes_in, bytes_out: reader.bytes_written() })
}

/// Compresses an in-memory buffer.
pub fn compress_to_vec(src: &[u8], params: &CodecParams) -> Result<Vec<u8>, Lz77Error> {
    let mut out = Vec::with_capacity(src.len() + src.len() / 2);
    compress(
        &mut Cursor::new(src),
        &mut out,
        params.compress_stage_size,
        params.compress_chunk_size,
        params.window_size,
    )?;
    Ok(out)
}

/// Decompresses an in-memory token stream.
pub fn decompress_to_vec(src: &[u8], params: &CodecParams) -> Result<Vec<u8>, Lz77Error> {
    let mut out = Vec::with_capacity(src.len());
    decompress(
        &mut Cursor::new(src),
        &mut out,
        params.decompress_stage_size,
        params.decompress_chunk_size,
        params.window_size,
    )?;
    Ok(out)
}
