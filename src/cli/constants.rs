// cli/constants.rs: program identity, size multipliers, and the display
// level shared by the CLI and the io layer.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "lz77";
pub const LZ77_EXTENSION: &str = ".lz77";
pub const LZ77CAT: &str = "lz77cat";
pub const UNLZ77: &str = "unlz77";

/// Welcome banner printed at display level ≥ 3.
/// Substitutes: compressor name, version string, pointer width.
pub const WELCOME_MESSAGE_FMT: &str = "*** {} v{} {}-bit, 3-byte-token LZ77 ***\n";

// ── Size multipliers (for `K` / `M` suffixes) ─────────────────────────────────
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = results + warnings (downgraded to 1
// when writing to stdout); 3 = progress + timing; 4 = verbose.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display macros ────────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
