// lz77: streaming LZ77 codec with fixed 3-byte tokens, plus the file-level
// tooling behind the `lz77` binary.

pub mod timefn;
pub mod config;
pub mod codec;
pub mod util;
pub mod io;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const LZ77_VERSION_MAJOR: u32 = 0;
pub const LZ77_VERSION_MINOR: u32 = 3;
pub const LZ77_VERSION_RELEASE: u32 = 0;
pub const LZ77_VERSION_NUMBER: u32 =
    LZ77_VERSION_MAJOR * 100 * 100 + LZ77_VERSION_MINOR * 100 + LZ77_VERSION_RELEASE;
pub const LZ77_VERSION_STRING: &str = "0.3.0";

/// Returns the version number, `major * 10000 + minor * 100 + release`.
pub fn version_number() -> u32 {
    LZ77_VERSION_NUMBER
}

pub fn version_string() -> &'static str {
    LZ77_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use codec::{
    compress, compress_to_vec, decompress, decompress_to_vec, CodecParams, CodecStats, Lz77Error,
};
