//! E2E: lossless round trips through the public codec API.
//!
//! Covers realistic inputs (text, binary, long runs, incompressible noise)
//! across windows and buffer sizes, through both the in-memory helpers and
//! the streaming `compress` / `decompress` calls.

use std::io::Cursor;

use lz77::codec::{compress, decompress, CodecParams, Token, MAX_WINDOW};
use lz77::{compress_to_vec, decompress_to_vec};

fn text_corpus() -> Vec<u8> {
    let line = "The quick brown fox jumps over the lazy dog; pack my box with five dozen liquor jugs.\n";
    let mut out = String::new();
    for i in 0..800 {
        out.push_str(&format!("{:05} {}", i, line));
    }
    out.into_bytes()
}

/// Deterministic xorshift noise.
fn noise(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed as u8
        })
        .collect()
}

fn round_trip(data: &[u8], params: &CodecParams) -> Vec<u8> {
    let encoded = compress_to_vec(data, params).unwrap();
    assert_eq!(encoded.len() % 3, 0);
    assert_eq!(decompress_to_vec(&encoded, params).unwrap(), data);
    encoded
}

// ─────────────────────────────────────────────────────────────────────────────
// Worked examples
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_abcabcabc_with_defaults() {
    let encoded = round_trip(b"abcabcabc", &CodecParams::default());
    let tokens: Vec<Token> = encoded.chunks(3).map(|t| Token::from_bytes([t[0], t[1], t[2]])).collect();
    assert_eq!(
        tokens,
        vec![
            Token::Literal(b'a'),
            Token::Literal(b'b'),
            Token::Literal(b'c'),
            Token::Match { distance: 3, length: 6 },
        ]
    );
}

#[test]
fn test_empty_input_gives_empty_stream() {
    assert!(round_trip(b"", &CodecParams::default()).is_empty());
}

#[test]
fn test_no_repetition_is_all_literals() {
    let encoded = round_trip(b"abcdefgh", &CodecParams::default());
    assert_eq!(encoded.len(), 24);
    assert!(encoded.chunks(3).all(|t| t[0] == 0 && t[1] == 0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Realistic data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_text_compresses_and_round_trips() {
    let data = text_corpus();
    let encoded = round_trip(&data, &CodecParams::default());
    assert!(encoded.len() < data.len(), "{} >= {}", encoded.len(), data.len());
}

#[test]
fn test_noise_expands_threefold_at_most() {
    let data = noise(20_000, 0x9E37_79B9_7F4A_7C15);
    let encoded = round_trip(&data, &CodecParams::default());
    assert!(encoded.len() <= data.len() * 3);
}

#[test]
fn test_long_zero_run() {
    let data = vec![0u8; 100_000];
    let encoded = round_trip(&data, &CodecParams::default());
    // Mostly 255-byte matches; each chunk boundary costs at most one literal.
    assert!(encoded.len() / 3 < data.len() / 100);
}

#[test]
fn test_mixed_content_every_window() {
    let mut data = text_corpus();
    data.extend(noise(5000, 42));
    data.extend(text_corpus());
    for window in [1, 2, 3, 255, 256, 4096, 16 * 1024, MAX_WINDOW] {
        round_trip(&data, &CodecParams::with_window(window));
    }
}

#[test]
fn test_small_buffers_everywhere() {
    let data = text_corpus();
    let params = CodecParams {
        compress_stage_size: 3,
        compress_chunk_size: 1,
        decompress_stage_size: 1,
        decompress_chunk_size: 3,
        window_size: 300,
    };
    round_trip(&data[..6000], &params);
}

#[test]
fn test_output_independent_of_stage_size() {
    let data = text_corpus();
    let a = compress_to_vec(&data, &CodecParams { compress_stage_size: 3, ..CodecParams::default() }).unwrap();
    let b = compress_to_vec(&data, &CodecParams { compress_stage_size: 1 << 20, ..CodecParams::default() }).unwrap();
    assert_eq!(a, b);
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming API
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_streaming_calls_report_byte_counts() {
    let data = text_corpus();
    let mut encoded = Vec::new();
    let c = compress(&mut Cursor::new(&data), &mut encoded, 512, 1000, 8192).unwrap();
    assert_eq!(c.bytes_in, data.len() as u64);
    assert_eq!(c.bytes_out, encoded.len() as u64);

    let mut decoded = Vec::new();
    let d = decompress(&mut Cursor::new(&encoded), &mut decoded, 700, 99, 8192).unwrap();
    assert_eq!(d.bytes_in, encoded.len() as u64);
    assert_eq!(d.bytes_out, data.len() as u64);
    assert_eq!(decoded, data);
}

#[test]
fn test_streaming_into_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("corpus.lz77");
    let data = text_corpus();
    {
        let mut f = std::fs::File::create(&path).unwrap();
        compress(&mut Cursor::new(&data), &mut f, 2048, 4096, 16 * 1024).unwrap();
    }
    let mut f = std::fs::File::open(&path).unwrap();
    let mut decoded = Vec::new();
    decompress(&mut f, &mut decoded, 4096, 2048, 16 * 1024).unwrap();
    assert_eq!(decoded, data);
}
