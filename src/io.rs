//! File-level orchestration on top of the token codec.
//!
//! This module assembles the `io` sub-modules and re-exports the symbols
//! consumed by the CLI and library users.

pub mod compress;
pub mod decompress;
pub mod file_info;
pub mod file_io;
pub mod prefs;
pub mod progress;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use file_info::CompressedFileInfo;
pub use prefs::Prefs;

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

// ── Notification level ───────────────────────────────────────────────────────
pub use prefs::set_notification_level;

// ── Worker count ─────────────────────────────────────────────────────────────
pub use prefs::default_nb_workers;

// ── Compression ──────────────────────────────────────────────────────────────
pub use compress::{compress_filename, compress_multiple_filenames};

// ── Decompression / test mode ────────────────────────────────────────────────
pub use decompress::{decompress_filename, decompress_multiple_filenames};

// ── --list ───────────────────────────────────────────────────────────────────
pub use file_info::{display_compressed_files_info, scan_token_stream};
