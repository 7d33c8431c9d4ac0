// Integration tests for util/file_size.rs.

use std::fs::{self, File};
use std::path::Path;

use lz77::util::{get_file_size, get_open_file_size, get_total_file_size};
use tempfile::TempDir;

#[test]
fn sizes_of_real_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    fs::write(&a, vec![7u8; 4096]).unwrap();
    fs::write(&b, b"").unwrap();
    assert_eq!(get_file_size(&a), 4096);
    assert_eq!(get_file_size(&b), 0);
    assert_eq!(get_open_file_size(&File::open(&a).unwrap()), 4096);
    assert_eq!(get_total_file_size(&[a.as_path(), b.as_path(), a.as_path()]), 8192);
}

#[cfg(unix)]
#[test]
fn character_device_is_unknown() {
    assert_eq!(get_file_size(Path::new("/dev/null")), 0);
}
