//! File-level compression.
//!
//! - [`compress_filename`]: one source to one destination, with progress
//!   and the final timing line.
//! - [`compress_multiple_filenames`]: each source to `<source><suffix>`,
//!   processed concurrently on a rayon pool when `prefs.nb_workers > 1`.
//!
//! Each file gets its own encoder, match index and buffers; nothing is shared
//! between concurrently processed files except the read-only [`Prefs`].

use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;

use crate::codec::{compress_observed, CodecStats};
use crate::io::file_io::{open_dst_file, open_src_file, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::{cpu_clock, display_level, final_time_display, Prefs};
use crate::io::progress::Progress;
use crate::timefn::get_time;
use crate::util::{copy_file_stat, get_file_size};

/// Compresses `src` into `dst` and applies the post-success actions
/// (attribute copy, `--rm`).  A partially written destination file is removed
/// on failure.
fn compress_filename_ext(src: &str, dst: &str, prefs: &Prefs, show_progress: bool) -> io::Result<CodecStats> {
    let mut src_reader = open_src_file(src)?;
    let src_size = if src == STDIN_MARK { 0 } else { get_file_size(Path::new(src)) };

    let mut dst_file = open_dst_file(dst, prefs)?;
    let dst_is_stdout = dst_file.is_stdout;
    let dst_is_regular = dst_file.is_regular;

    let mut progress = Progress::new(src_size, show_progress);
    let result = compress_observed(
        &mut src_reader,
        &mut dst_file,
        prefs.compress_stage_size,
        prefs.compress_chunk_size,
        prefs.window_size,
        progress.observer(),
    );
    drop(dst_file);
    progress.clear();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            display_level(1, &format!("{}: compression failed: {}\n", src, e));
            if dst_is_regular {
                let _ = fs::remove_file(dst);
            }
            return Err(e.into());
        }
    };

    if dst_is_regular && src != STDIN_MARK {
        // Attributes are best effort; a failure here does not fail the file.
        let _ = copy_file_stat(Path::new(src), Path::new(dst));
    }

    if prefs.remove_src_file && src != STDIN_MARK && !dst_is_stdout {
        fs::remove_file(src)
            .map_err(|e| io::Error::new(e.kind(), format!("Remove error: {}: {}", src, e)))?;
    }

    display_level(
        2,
        &format!(
            "Compressed {} bytes into {} bytes ==> {:.2}%\n",
            stats.bytes_in,
            stats.bytes_out,
            stats.bytes_out as f64 / stats.bytes_in.max(1) as f64 * 100.0,
        ),
    );
    Ok(stats)
}

/// Compresses a single file.
///
/// `src` may be `"stdin"` and `dst` may be `"stdout"`.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<CodecStats> {
    let time_start = get_time();
    let cpu_start = cpu_clock();

    let result = compress_filename_ext(src, dst, prefs, true);

    let processed = result.as_ref().map(|s| s.bytes_in).unwrap_or(0);
    final_time_display(time_start, cpu_start, processed);
    result
}

/// Compresses every file in `srcs` to `<src><suffix>`, or all of them to
/// stdout when `suffix` is `"stdout"`.
///
/// Files are independent: a failure is reported and counted, and the
/// remaining files are still processed.  Returns the number of files that
/// could not be compressed.
pub fn compress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> io::Result<usize> {
    let time_start = get_time();
    let cpu_start = cpu_clock();

    let dst_name = |src: &str| -> String {
        if suffix == STDOUT_MARK {
            STDOUT_MARK.to_owned()
        } else {
            format!("{}{}", src, suffix)
        }
    };

    // Output to stdout must stay in input order.
    let parallel = prefs.nb_workers > 1 && srcs.len() > 1 && suffix != STDOUT_MARK;

    let results: Vec<io::Result<CodecStats>> = if parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(prefs.nb_workers)
            .build()
            .map_err(|e| io::Error::other(format!("cannot create worker pool: {}", e)))?;
        pool.install(|| {
            srcs.par_iter()
                .map(|&src| compress_filename_ext(src, &dst_name(src), prefs, false))
                .collect()
        })
    } else {
        srcs.iter()
            .map(|&src| compress_filename_ext(src, &dst_name(src), prefs, true))
            .collect()
    };

    let mut total_processed: u64 = 0;
    let mut missed_files: usize = 0;
    for result in &results {
        match result {
            Ok(stats) => total_processed += stats.bytes_in,
            Err(_) => missed_files += 1,
        }
    }

    final_time_display(time_start, cpu_start, total_processed);
    Ok(missed_files)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
