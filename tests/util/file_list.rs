// Integration tests for util/file_list.rs: recursive expansion for -r.

use std::fs;
use std::path::{Path, PathBuf};

use lz77::util::create_file_list;
use tempfile::TempDir;

#[test]
fn mixes_files_and_directories_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("d")).unwrap();
    fs::write(root.join("d/2.txt"), b"2").unwrap();
    fs::write(root.join("d/1.txt"), b"1").unwrap();
    fs::write(root.join("single.txt"), b"s").unwrap();

    let single = root.join("single.txt");
    let d = root.join("d");
    let list = create_file_list(&[single.as_path(), d.as_path()]).unwrap();
    assert_eq!(list, vec![single, d.join("1.txt"), d.join("2.txt")]);
}

#[test]
fn empty_directory_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    let empty = dir.path().join("empty");
    assert!(create_file_list(&[empty.as_path()]).unwrap().is_empty());
}

#[test]
fn stdin_marker_is_passed_through() {
    let list = create_file_list(&[Path::new("stdin")]).unwrap();
    assert_eq!(list, vec![PathBuf::from("stdin")]);
}
