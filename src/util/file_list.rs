//! Expansion of command-line inputs into a flat list of files.
//!
//! Directories given with `-r` are walked recursively with [`walkdir`].
//! Entries are visited in file-name order so repeated runs process files in
//! the same sequence.  Symlinks found inside a directory are neither followed
//! nor returned; a symlink named directly on the command line is kept.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn walk_error(e: walkdir::Error) -> io::Error {
    let msg = e.to_string();
    match e.into_io_error() {
        Some(io) => io::Error::new(io.kind(), msg),
        None => io::Error::other(msg),
    }
}

/// Replaces each directory in `inputs` by the regular files below it.
///
/// Non-directory inputs are forwarded unchanged without an existence check;
/// opening them later reports the error per file.  Any unreadable directory
/// entry aborts the walk.
pub fn create_file_list(inputs: &[&Path]) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}
