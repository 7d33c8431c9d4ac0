// Integration tests for source/destination opening and the special names.

use std::io::{Read, Write};

use lz77::io::file_io::{open_dst_file, open_src_file, DstFile};
use lz77::io::{Prefs, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use tempfile::TempDir;

#[test]
fn special_names() {
    assert_eq!(STDIN_MARK, "stdin");
    assert_eq!(STDOUT_MARK, "stdout");
    assert!(!NUL_MARK.is_empty());
}

#[test]
fn source_larger_than_the_io_buffer_is_read_whole() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("big.bin");
    let data: Vec<u8> = (0..200_000u32).map(|i| (i % 253) as u8).collect();
    std::fs::write(&p, &data).unwrap();

    let mut back = Vec::new();
    open_src_file(p.to_str().unwrap()).unwrap().read_to_end(&mut back).unwrap();
    assert_eq!(back, data);
}

#[test]
fn sink_accepts_everything() {
    let mut sink = DstFile::sink();
    sink.write_all(&[0u8; 10_000]).unwrap();
    sink.flush().unwrap();
    assert!(!sink.is_regular);
}

#[test]
fn destination_is_flushed_on_drop() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("dropped.lz77");
    {
        let mut dst = open_dst_file(p.to_str().unwrap(), &Prefs::default()).unwrap();
        dst.write_all(b"buffered").unwrap();
    }
    assert_eq!(std::fs::read(&p).unwrap(), b"buffered");
}

#[test]
fn destination_in_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("no/such/dir/out.lz77");
    assert!(open_dst_file(p.to_str().unwrap(), &Prefs::default()).is_err());
}
