//! E2E: malformed streams, bad parameters and failing sinks.
//!
//! Every failure must surface as a typed error; bytes decoded before the
//! failure stay in the output.

use std::io::{self, Cursor, ErrorKind, Write};

use lz77::codec::{compress, decompress, CodecParams, Lz77Error, Token};
use lz77::{compress_to_vec, decompress_to_vec};

fn stream(tokens: &[Token]) -> Vec<u8> {
    tokens.iter().flat_map(|t| t.to_bytes()).collect()
}

/// Accepts `budget` bytes, then fails.
struct FailingSink {
    budget: usize,
    taken: Vec<u8>,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::other("disk full"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.taken.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_match_before_any_output() {
    let err = decompress_to_vec(&stream(&[Token::Match { distance: 1, length: 3 }]), &CodecParams::default())
        .unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidDistance { distance: 1, available: 0 }));
}

#[test]
fn test_truncated_stream_keeps_decoded_prefix() {
    let mut bytes = stream(&[Token::Literal(b'o'), Token::Literal(b'k')]);
    bytes.extend_from_slice(&[0, 0]);
    let mut out = Vec::new();
    let err = decompress(&mut Cursor::new(bytes), &mut out, 64, 64, 64).unwrap_err();
    assert!(matches!(err, Lz77Error::TruncatedToken { remaining: 2 }));
    assert_eq!(out, b"ok");
}

#[test]
fn test_corruption_inside_valid_stream() {
    let data = b"hello hello hello hello".to_vec();
    let mut encoded = compress_to_vec(&data, &CodecParams::default()).unwrap();
    let last = encoded.len() - 3;
    encoded[last..].copy_from_slice(&[0xFF, 0x7F, 10]);
    let err = decompress_to_vec(&encoded, &CodecParams::default()).unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidDistance { distance: 0x7FFF, .. }));
}

#[test]
fn test_zero_length_match() {
    let bytes = stream(&[Token::Literal(b'a'), Token::Match { distance: 1, length: 0 }]);
    let err = decompress_to_vec(&bytes, &CodecParams::default()).unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidLength(0)));
    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), ErrorKind::InvalidData);
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bad_parameters_are_invalid_argument() {
    let mut out = Vec::new();
    for (stage, chunk, window) in [(0, 64, 64), (64, 0, 64), (64, 64, 0), (64, 64, 65_536)] {
        let err = compress(&mut Cursor::new(b"x"), &mut out, stage, chunk, window).unwrap_err();
        assert!(matches!(err, Lz77Error::InvalidArgument(_)), "{:?}", (stage, chunk, window));
    }
    let err = decompress(&mut Cursor::new(b""), &mut out, 64, 2, 64).unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidArgument(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Sinks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compress_into_failing_sink() {
    let data: Vec<u8> = (0..5000u32).map(|i| (i * 7 % 251) as u8).collect();
    let mut sink = FailingSink { budget: 30, taken: Vec::new() };
    let err = compress(&mut Cursor::new(&data), &mut sink, 30, 256, 1024).unwrap_err();
    assert!(matches!(err, Lz77Error::Io(_)));
    assert_eq!(sink.taken.len(), 30);
}

#[test]
fn test_decompress_into_failing_sink() {
    let data = vec![9u8; 10_000];
    let encoded = compress_to_vec(&data, &CodecParams::default()).unwrap();
    let mut sink = FailingSink { budget: 100, taken: Vec::new() };
    let err = decompress(&mut Cursor::new(&encoded), &mut sink, 64, 64, 16 * 1024).unwrap_err();
    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), ErrorKind::Other);
    assert!(sink.taken.iter().all(|&b| b == 9));
}
