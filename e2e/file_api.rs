//! E2E: the file-level entry points behind the CLI.
//!
//! Exercises `lz77::io` on real files: naming, overwrite policy, source
//! removal, test mode and multi-file batches.

use std::fs;
use std::path::Path;

use lz77::io::prefs::{set_notification_level, Prefs};
use lz77::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, NUL_MARK,
};
use tempfile::TempDir;

fn silent_prefs() -> Prefs {
    set_notification_level(0);
    Prefs::default()
}

fn write_sample(dir: &Path, name: &str, repeat: usize) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("{} says hello. ", name).repeat(repeat)).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_compress_then_decompress_file() {
    let dir = TempDir::new().unwrap();
    let src = write_sample(dir.path(), "report.txt", 500);
    let enc = format!("{}.lz77", src);
    let dec = dir.path().join("report.out").to_string_lossy().into_owned();
    let prefs = silent_prefs();

    let c = compress_filename(&src, &enc, &prefs).unwrap();
    assert_eq!(c.bytes_in, fs::metadata(&src).unwrap().len());
    assert_eq!(c.bytes_out, fs::metadata(&enc).unwrap().len());

    let d = decompress_filename(&enc, &dec, &prefs).unwrap();
    assert_eq!(d.bytes_out, c.bytes_in);
    assert_eq!(fs::read(&src).unwrap(), fs::read(&dec).unwrap());
}

#[test]
fn test_remove_source_after_success() {
    let dir = TempDir::new().unwrap();
    let src = write_sample(dir.path(), "gone.txt", 50);
    let enc = format!("{}.lz77", src);
    let mut prefs = silent_prefs();
    prefs.set_remove_src_file(true);

    compress_filename(&src, &enc, &prefs).unwrap();
    assert!(!Path::new(&src).exists());
    decompress_filename(&enc, &src, &prefs).unwrap();
    assert!(!Path::new(&enc).exists());
    assert!(fs::read_to_string(&src).unwrap().starts_with("gone.txt says hello."));
}

#[test]
fn test_test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = write_sample(dir.path(), "t.txt", 20);
    let enc = format!("{}.lz77", src);
    let mut prefs = silent_prefs();
    compress_filename(&src, &enc, &prefs).unwrap();

    prefs.set_test_mode(true);
    let before: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    let stats = decompress_filename(&enc, NUL_MARK, &prefs).unwrap();
    assert_eq!(stats.bytes_out, fs::metadata(&src).unwrap().len());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), before.len());
}

#[test]
fn test_batch_round_trip_with_workers() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..6).map(|i| write_sample(dir.path(), &format!("f{}.txt", i), 30 + i)).collect();
    let srcs: Vec<&str> = names.iter().map(String::as_str).collect();
    let originals: Vec<Vec<u8>> = names.iter().map(|n| fs::read(n).unwrap()).collect();

    let mut prefs = silent_prefs();
    prefs.set_nb_workers(3);
    assert_eq!(compress_multiple_filenames(&srcs, ".lz77", &prefs).unwrap(), 0);
    for n in &names {
        fs::remove_file(n).unwrap();
    }

    let encoded: Vec<String> = names.iter().map(|n| format!("{}.lz77", n)).collect();
    let encs: Vec<&str> = encoded.iter().map(String::as_str).collect();
    assert_eq!(decompress_multiple_filenames(&encs, ".lz77", &prefs).unwrap(), 0);
    for (n, original) in names.iter().zip(&originals) {
        assert_eq!(&fs::read(n).unwrap(), original);
    }
}

#[test]
fn test_batch_counts_missing_and_misnamed() {
    let dir = TempDir::new().unwrap();
    let good = write_sample(dir.path(), "ok.txt", 10);
    let enc = format!("{}.lz77", good);
    let prefs = silent_prefs();
    compress_filename(&good, &enc, &prefs).unwrap();

    let missing = dir.path().join("missing.lz77").to_string_lossy().into_owned();
    let misnamed = good.clone();
    let srcs = [enc.as_str(), missing.as_str(), misnamed.as_str()];
    let failures = decompress_multiple_filenames(&srcs, ".lz77", &prefs).unwrap();
    assert_eq!(failures, 2);
}

#[test]
fn test_window_is_a_shared_parameter() {
    let dir = TempDir::new().unwrap();
    let src = write_sample(dir.path(), "w.txt", 200);
    let enc = format!("{}.lz77", src);
    let dec = dir.path().join("w.dec").to_string_lossy().into_owned();

    let mut prefs = silent_prefs();
    prefs.set_window_size(60_000);
    compress_filename(&src, &enc, &prefs).unwrap();
    decompress_filename(&enc, &dec, &prefs).unwrap();
    assert_eq!(fs::read(&src).unwrap(), fs::read(&dec).unwrap());
}
