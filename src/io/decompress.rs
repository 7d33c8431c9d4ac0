//! File-level decompression and test mode.
//!
//! - [`decompress_filename`]: one source to one destination.
//! - [`decompress_multiple_filenames`]: each `<name><suffix>` to `<name>`,
//!   or every source to stdout / the null device.
//!
//! In test mode (`prefs.test_mode`) the decoded bytes go to a sink: corrupt
//! streams are still detected, but nothing is written and sources are never
//! removed.

use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;

use crate::codec::{decompress_observed, CodecStats};
use crate::io::file_io::{open_dst_file, open_src_file, DstFile, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::{cpu_clock, display_level, final_time_display, Prefs};
use crate::io::progress::Progress;
use crate::timefn::get_time;
use crate::util::{copy_file_stat, get_file_size};

fn decompress_filename_ext(src: &str, dst: &str, prefs: &Prefs, show_progress: bool) -> io::Result<CodecStats> {
    let mut src_reader = open_src_file(src)?;
    let src_size = if src == STDIN_MARK { 0 } else { get_file_size(Path::new(src)) };

    let mut dst_file = if prefs.test_mode { DstFile::sink() } else { open_dst_file(dst, prefs)? };
    let dst_is_stdout = dst_file.is_stdout;
    let dst_is_regular = dst_file.is_regular;

    let mut progress = Progress::new(src_size, show_progress);
    let result = decompress_observed(
        &mut src_reader,
        &mut dst_file,
        prefs.decompress_stage_size,
        prefs.decompress_chunk_size,
        prefs.window_size,
        progress.observer(),
    );
    drop(dst_file);
    progress.clear();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            display_level(1, &format!("{}: decoding failed: {}\n", src, e));
            if dst_is_regular {
                let _ = fs::remove_file(dst);
            }
            return Err(e.into());
        }
    };

    if dst_is_regular && src != STDIN_MARK {
        let _ = copy_file_stat(Path::new(src), Path::new(dst));
    }

    if prefs.remove_src_file && !prefs.test_mode && src != STDIN_MARK && !dst_is_stdout {
        fs::remove_file(src)
            .map_err(|e| io::Error::new(e.kind(), format!("Remove error: {}: {}", src, e)))?;
    }

    display_level(
        2,
        &format!("Decompressed {} bytes into {} bytes\n", stats.bytes_in, stats.bytes_out),
    );
    Ok(stats)
}

/// Decompresses a single file.
///
/// `src` may be `"stdin"`; `dst` may be `"stdout"` or the null device.
/// Returns encoded bytes read (`bytes_in`) and decoded bytes produced
/// (`bytes_out`).
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<CodecStats> {
    let time_start = get_time();
    let cpu_start = cpu_clock();

    let result = decompress_filename_ext(src, dst, prefs, true);

    let produced = result.as_ref().map(|s| s.bytes_out).unwrap_or(0);
    final_time_display(time_start, cpu_start, produced);
    result
}

/// Decompresses every file in `srcs`.
///
/// When `suffix` is `"stdout"` or the null device (or in test mode) every
/// source is decoded to that single destination, in order.  Otherwise each
/// source must end with `suffix`, which is stripped to form its destination;
/// other names are skipped with a warning.  Returns the number of files
/// that were skipped or failed.
pub fn decompress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> io::Result<usize> {
    let time_start = get_time();
    let cpu_start = cpu_clock();

    let dst_is_special = suffix == STDOUT_MARK || suffix == NUL_MARK || prefs.test_mode;

    let mut skipped_files: usize = 0;
    let mut jobs: Vec<(&str, String)> = Vec::with_capacity(srcs.len());
    for &src in srcs {
        if dst_is_special {
            jobs.push((src, suffix.to_owned()));
        } else if src.len() > suffix.len() && src.ends_with(suffix) {
            jobs.push((src, src[..src.len() - suffix.len()].to_owned()));
        } else {
            display_level(
                1,
                &format!(
                    "File extension doesn't match expected extension ({}); will not process file: {}\n",
                    suffix, src
                ),
            );
            skipped_files += 1;
        }
    }

    let parallel = prefs.nb_workers > 1 && jobs.len() > 1 && suffix != STDOUT_MARK;

    let results: Vec<io::Result<CodecStats>> = if parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(prefs.nb_workers)
            .build()
            .map_err(|e| io::Error::other(format!("cannot create worker pool: {}", e)))?;
        pool.install(|| {
            jobs.par_iter()
                .map(|(src, dst)| decompress_filename_ext(src, dst, prefs, false))
                .collect()
        })
    } else {
        jobs.iter()
            .map(|(src, dst)| decompress_filename_ext(src, dst, prefs, true))
            .collect()
    };

    let mut total_produced: u64 = 0;
    let mut missing_files: usize = 0;
    for result in &results {
        match result {
            Ok(stats) => total_produced += stats.bytes_out,
            Err(_) => missing_files += 1,
        }
    }

    final_time_display(time_start, cpu_start, total_produced);
    Ok(missing_files + skipped_files)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
