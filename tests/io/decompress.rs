// Integration tests for file-level decompression and test mode.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use lz77::codec::{compress_to_vec, CodecParams, Token};
use lz77::io::{compress_filename, decompress_filename, decompress_multiple_filenames, Prefs, NUL_MARK};
use tempfile::TempDir;

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

fn encode_into(dir: &Path, name: &str, plain: &[u8]) -> String {
    let p = dir.join(name);
    fs::write(&p, compress_to_vec(plain, &CodecParams::default()).unwrap()).unwrap();
    path_str(&p).to_owned()
}

#[test]
fn file_round_trip_through_both_entry_points() {
    let dir = TempDir::new().unwrap();
    let plain = b"round and round and round we go ".repeat(64);
    let src = dir.path().join("r.txt");
    let enc = dir.path().join("r.txt.lz77");
    let out = dir.path().join("r.out");
    fs::write(&src, &plain).unwrap();

    let prefs = Prefs::default();
    let c = compress_filename(path_str(&src), path_str(&enc), &prefs).unwrap();
    let d = decompress_filename(path_str(&enc), path_str(&out), &prefs).unwrap();
    assert_eq!(c.bytes_out, d.bytes_in);
    assert_eq!(d.bytes_out, plain.len() as u64);
    assert_eq!(fs::read(&out).unwrap(), plain);
}

#[test]
fn invalid_length_removes_output() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("len.lz77");
    let mut bad = Token::Literal(b'a').to_bytes().to_vec();
    bad.extend_from_slice(&[1, 0, 1]);
    fs::write(&src, bad).unwrap();
    let dst = dir.path().join("len");

    let err = decompress_filename(path_str(&src), path_str(&dst), &Prefs::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(!dst.exists());
}

#[test]
fn rm_deletes_source_after_success() {
    let dir = TempDir::new().unwrap();
    let src = encode_into(dir.path(), "gone.lz77", b"to be removed");
    let dst = dir.path().join("gone");
    let mut prefs = Prefs::default();
    prefs.set_remove_src_file(true);
    decompress_filename(&src, path_str(&dst), &prefs).unwrap();
    assert!(!Path::new(&src).exists());
    assert_eq!(fs::read(&dst).unwrap(), b"to be removed");
}

#[test]
fn null_destination_discards_output() {
    let dir = TempDir::new().unwrap();
    let src = encode_into(dir.path(), "n.lz77", b"nothing to see");
    let stats = decompress_filename(&src, NUL_MARK, &Prefs::default()).unwrap();
    assert_eq!(stats.bytes_out, 14);
}

#[test]
fn test_mode_over_many_files_reports_corrupt_ones() {
    let dir = TempDir::new().unwrap();
    let good = encode_into(dir.path(), "good.lz77", b"good data good data");
    let bad = dir.path().join("bad.lz77");
    fs::write(&bad, [5u8, 0, 9]).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_test_mode(true);
    let missed = decompress_multiple_filenames(&[good.as_str(), path_str(&bad)], NUL_MARK, &prefs).unwrap();
    assert_eq!(missed, 1);
    assert!(!dir.path().join("good").exists());
}

#[test]
fn window_must_match_the_encoder() {
    let dir = TempDir::new().unwrap();
    let plain: Vec<u8> = b"0123456789abcdef".repeat(100);
    let p = dir.path().join("win.lz77");
    fs::write(&p, compress_to_vec(&plain, &CodecParams::with_window(1024)).unwrap()).unwrap();

    let mut prefs = Prefs::default();
    prefs.set_window_size(1024);
    prefs.set_test_mode(true);
    assert!(decompress_filename(path_str(&p), NUL_MARK, &prefs).is_ok());

    // Every repeat is 16 bytes back, which a 8-byte window cannot reach.
    prefs.set_window_size(8);
    let err = decompress_filename(path_str(&p), NUL_MARK, &prefs).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}
