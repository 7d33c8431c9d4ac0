//! LZ77 token codec: streaming encoder and decoder.
//!
//! The encoded stream is a flat sequence of 3-byte tokens with no header:
//! `[offset_lo, offset_hi, payload]`.  An offset of zero marks a literal
//! (payload is the byte); otherwise the token copies `payload` bytes from
//! `offset` bytes back in the decoded output.

pub mod api;
pub mod chunk;
pub mod index;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export key public API items at the module level.
pub use api::{
    compress, compress_observed, compress_to_vec, decompress, decompress_observed,
    decompress_to_vec, CodecParams, CodecStats,
};
pub use chunk::ChunkBuffer;
pub use index::{hash_prefix, MatchIndex};
pub use reader::{Dictionary, LzReader};
pub use types::{
    Lz77Error, Match, Token, MAX_CHAIN, MAX_MATCH, MAX_WINDOW, MIN_MATCH, TABLE_SIZE, TOKEN_SIZE,
};
pub use writer::LzWriter;
