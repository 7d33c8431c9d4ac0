// Integration tests for --list: token statistics over encoded files.

use std::fs;
use std::io::{Cursor, ErrorKind};

use lz77::codec::{compress_to_vec, CodecParams, Lz77Error, Token};
use lz77::io::{display_compressed_files_info, scan_token_stream, CompressedFileInfo, Prefs};
use tempfile::TempDir;

#[test]
fn scan_matches_hand_built_stream() {
    let tokens = [
        Token::Literal(b'h'),
        Token::Literal(b'a'),
        Token::Match { distance: 2, length: 6 },
        Token::Literal(b'!'),
        Token::Match { distance: 9, length: 2 },
    ];
    let bytes: Vec<u8> = tokens.iter().flat_map(|t| t.to_bytes()).collect();
    let info = scan_token_stream(&mut Cursor::new(bytes), 4, 64).unwrap();
    assert_eq!(
        info,
        CompressedFileInfo {
            file_name: String::new(),
            file_size: 15,
            literals: 3,
            matches: 2,
            decoded_size: 11,
            longest_match: 6,
            farthest_distance: 9,
        }
    );
    assert_eq!(info.tokens(), 5);
}

#[test]
fn ratio_is_encoded_over_decoded() {
    let info = CompressedFileInfo { file_size: 30, decoded_size: 120, ..Default::default() };
    assert_eq!(info.ratio(), Some(25.0));
}

#[test]
fn scan_respects_the_window() {
    let plain = b"abcdefgh".repeat(4);
    let encoded = compress_to_vec(&plain, &CodecParams::with_window(64)).unwrap();
    assert!(scan_token_stream(&mut Cursor::new(&encoded), 64, 64).is_ok());
    let err = scan_token_stream(&mut Cursor::new(&encoded), 64, 4).unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidDistance { .. }));
}

#[test]
fn scan_rejects_short_match() {
    let bytes = [0u8, 0, b'x', 1, 0, 1];
    let err = scan_token_stream(&mut Cursor::new(bytes), 64, 64).unwrap_err();
    assert!(matches!(err, Lz77Error::InvalidLength(1)));
}

#[test]
fn display_succeeds_on_valid_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.lz77");
    let b = dir.path().join("b.lz77");
    fs::write(&a, compress_to_vec(b"first first first", &CodecParams::default()).unwrap()).unwrap();
    fs::write(&b, b"").unwrap();
    let srcs = [a.to_str().unwrap(), b.to_str().unwrap()];
    display_compressed_files_info(&srcs, &Prefs::default()).unwrap();
}

#[test]
fn display_rejects_directories_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let err = display_compressed_files_info(&[dir.path().to_str().unwrap()], &Prefs::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    let missing = dir.path().join("missing.lz77");
    assert!(display_compressed_files_info(&[missing.to_str().unwrap()], &Prefs::default()).is_err());
}

#[test]
fn display_reports_truncated_file() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("cut.lz77");
    fs::write(&p, [0u8, 0, b'a', 0, 0]).unwrap();
    let err = display_compressed_files_info(&[p.to_str().unwrap()], &Prefs::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}
