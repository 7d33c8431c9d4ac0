// prefs.rs: io-layer preferences, notification helpers, and the final
// timing line.
//
// The display level itself lives in `cli::constants::DISPLAY_LEVEL`; the
// helpers here read it so that the io layer and the CLI agree on one value.

use std::io::Write;

use crate::cli::constants::{display_level as current_level, set_display_level};
use crate::codec::{CodecParams, MAX_WINDOW, TOKEN_SIZE};
use crate::config::{
    COMPRESSED_BUFFER_SIZE, DECOMPRESSED_BUFFER_SIZE, NB_WORKERS_MAX, WINDOW_SIZE,
};
use crate::timefn::{clock_span_ns, DurationNs, TimeT};

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Minimum interval between two progress refreshes (200 ms).
pub const REFRESH_RATE_NS: DurationNs = 200_000_000;

/// Writes `msg` to stderr if the notification level is ≥ `level`.
/// Flushes stderr at level ≥ 4.
#[inline]
pub fn display_level(level: u32, msg: &str) {
    if current_level() >= level {
        eprint!("{}", msg);
        if current_level() >= 4 {
            let _ = std::io::stderr().flush();
        }
    }
}

/// Sets the global notification level and returns it.
pub fn set_notification_level(level: u32) -> u32 {
    set_display_level(level);
    level
}

// ---------------------------------------------------------------------------
// CPU-load helper
// ---------------------------------------------------------------------------

/// Current process CPU clock, in `clock()` ticks.
pub fn cpu_clock() -> libc::clock_t {
    #[cfg(unix)]
    {
        extern "C" {
            fn clock() -> libc::clock_t;
        }
        // SAFETY: `clock` has no preconditions and touches no caller memory.
        unsafe { clock() }
    }
    #[cfg(not(unix))]
    {
        0
    }
}

/// Seconds of CPU time consumed since `cpu_start`.
pub fn cpu_load_sec(cpu_start: libc::clock_t) -> f64 {
    // CLOCKS_PER_SEC is 1_000_000 on every POSIX (XSI) system.
    const CLOCKS_PER_SEC: f64 = 1_000_000.0;
    (cpu_clock() - cpu_start) as f64 / CLOCKS_PER_SEC
}

/// Prints `Done in … s ==> … MiB/s  (cpu load : …%)` at level 3.
pub fn final_time_display(time_start: TimeT, cpu_start: libc::clock_t, size: u64) {
    let duration_ns = clock_span_ns(time_start).max(1);
    let seconds = duration_ns as f64 / 1_000_000_000.0;
    let cpu_load_s = cpu_load_sec(cpu_start);
    let msg = format!(
        "Done in {:.2} s ==> {:.2} MiB/s  (cpu load : {:.0}%)\n",
        seconds,
        (size as f64) / seconds / 1024.0 / 1024.0,
        (cpu_load_s / seconds) * 100.0,
    );
    display_level(3, &msg);
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// Tunables for file-level compression and decompression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Sliding window; must be identical for compression and decompression.
    pub window_size: usize,
    /// Encoder token staging buffer.
    pub compress_stage_size: usize,
    /// Encoder input chunk.
    pub compress_chunk_size: usize,
    /// Decoder output staging buffer.
    pub decompress_stage_size: usize,
    /// Decoder token chunk.
    pub decompress_chunk_size: usize,
    /// Overwrite existing destination files without asking. Default: true.
    pub overwrite: bool,
    /// Decode but discard the output. Default: false.
    pub test_mode: bool,
    /// Delete the source after a successful operation. Default: false.
    pub remove_src_file: bool,
    /// Files processed concurrently by the multi-file entry points.
    pub nb_workers: usize,
}

/// Default number of concurrent file workers: physical cores, less one core
/// in eight kept free for the rest of the system.
pub fn default_nb_workers() -> usize {
    let nb_cores = crate::util::count_cores();
    let spared = 1 + (nb_cores >> 3);
    if nb_cores <= spared {
        1
    } else {
        (nb_cores - spared).min(NB_WORKERS_MAX)
    }
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            window_size: WINDOW_SIZE,
            compress_stage_size: COMPRESSED_BUFFER_SIZE,
            compress_chunk_size: DECOMPRESSED_BUFFER_SIZE,
            decompress_stage_size: DECOMPRESSED_BUFFER_SIZE,
            decompress_chunk_size: COMPRESSED_BUFFER_SIZE,
            overwrite: true,
            test_mode: false,
            remove_src_file: false,
            nb_workers: 1,
        }
    }
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window, clamped to `1..=65535`.  Returns the stored value.
    pub fn set_window_size(&mut self, window_size: usize) -> usize {
        self.window_size = window_size.clamp(1, MAX_WINDOW);
        self.window_size
    }

    /// Sets both chunk sizes (raw input when compressing, tokens when
    /// decompressing), at least one token.  Returns the stored value.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> usize {
        let chunk_size = chunk_size.max(TOKEN_SIZE);
        self.compress_chunk_size = chunk_size;
        self.decompress_chunk_size = chunk_size;
        chunk_size
    }

    /// Sets both staging buffer sizes, at least one token.  Returns the
    /// stored value.
    pub fn set_stage_size(&mut self, stage_size: usize) -> usize {
        let stage_size = stage_size.max(TOKEN_SIZE);
        self.compress_stage_size = stage_size;
        self.decompress_stage_size = stage_size;
        stage_size
    }

    /// Sets the worker count, clamped to `[1, NB_WORKERS_MAX]`.
    pub fn set_nb_workers(&mut self, nb_workers: usize) -> usize {
        self.nb_workers = nb_workers.clamp(1, NB_WORKERS_MAX);
        self.nb_workers
    }

    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    pub fn set_test_mode(&mut self, yes: bool) -> bool {
        self.test_mode = yes;
        yes
    }

    pub fn set_remove_src_file(&mut self, flag: bool) {
        self.remove_src_file = flag;
    }

    /// Codec parameters derived from these preferences.
    pub fn codec_params(&self) -> CodecParams {
        CodecParams {
            compress_stage_size: self.compress_stage_size,
            compress_chunk_size: self.compress_chunk_size,
            decompress_stage_size: self.decompress_stage_size,
            decompress_chunk_size: self.decompress_chunk_size,
            window_size: self.window_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
