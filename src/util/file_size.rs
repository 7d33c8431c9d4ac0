//! File size probing.
//!
//! Sizes are only used to render `Read : x / y bytes` progress and the final
//! ratio, so every function here degrades to `0` ("unknown") instead of
//! failing: pipes, terminals, directories and missing paths all report 0.

use std::fs::{self, File, Metadata};
use std::path::Path;

fn regular_len(meta: std::io::Result<Metadata>) -> u64 {
    meta.ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Size in bytes of an already-open file, or 0 if it is not a regular file.
pub fn get_open_file_size(file: &File) -> u64 {
    regular_len(file.metadata())
}

/// Size in bytes of the regular file at `path`, or 0.
pub fn get_file_size(path: &Path) -> u64 {
    regular_len(fs::metadata(path))
}

/// Sum of [`get_file_size`] over `paths`.
pub fn get_total_file_size(paths: &[&Path]) -> u64 {
    paths.iter().map(|p| get_file_size(p)).sum()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
