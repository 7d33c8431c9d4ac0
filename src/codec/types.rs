//! Wire-format constants, the 3-byte token, match descriptors and the codec
//! error type.
//!
//! The encoded stream is a flat sequence of tokens with no header, footer or
//! checksum:
//!
//! ```text
//! +-------------+-------------+---------+
//! | offset (lo) | offset (hi) | payload |
//! +-------------+-------------+---------+
//! ```
//!
//! An `offset` of zero marks a literal (`payload` is the byte itself).  Any
//! other offset is the backward distance of a match and `payload` its length.

use std::fmt;
use std::io;

// ─────────────────────────────────────────────────────────────────────────────
// Format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Size in bytes of every token on the wire.
pub const TOKEN_SIZE: usize = 3;

/// Shortest match worth encoding as a back-reference.
pub const MIN_MATCH: usize = 2;

/// Longest match a single token can carry (the payload is one byte).
pub const MAX_MATCH: usize = 255;

/// Largest window the 16-bit offset field can address.
pub const MAX_WINDOW: usize = u16::MAX as usize;

/// Number of buckets in the match index.  Independent of the window size.
pub const TABLE_SIZE: usize = 1 << 16;

/// Maximum number of positions retained per bucket.
pub const MAX_CHAIN: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One decoded wire unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A single byte copied verbatim.
    Literal(u8),
    /// A back-reference of `length` bytes starting `distance` bytes back.
    Match { distance: u16, length: u8 },
}

impl Token {
    /// Serialises the token into its 3-byte little-endian wire form.
    #[inline]
    pub fn to_bytes(self) -> [u8; TOKEN_SIZE] {
        match self {
            Token::Literal(b) => [0, 0, b],
            Token::Match { distance, length } => {
                let [lo, hi] = distance.to_le_bytes();
                [lo, hi, length]
            }
        }
    }

    /// Parses a token from exactly [`TOKEN_SIZE`] bytes.
    ///
    /// No range checking is performed on matches here; the decoder validates
    /// distance and length against its dictionary.
    #[inline]
    pub fn from_bytes(bytes: [u8; TOKEN_SIZE]) -> Self {
        let offset = u16::from_le_bytes([bytes[0], bytes[1]]);
        if offset == 0 {
            Token::Literal(bytes[2])
        } else {
            Token::Match { distance: offset, length: bytes[2] }
        }
    }

    /// Number of output bytes this token expands to.
    #[inline]
    pub fn decoded_len(self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => length as usize,
        }
    }
}

/// Result of a successful match search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Backward distance from the current position, `1..=window_size`.
    pub distance: usize,
    /// Number of matching bytes, `MIN_MATCH..=MAX_MATCH`.
    pub length: usize,
}

impl Match {
    /// Converts the match into its wire token.
    ///
    /// Callers guarantee `distance <= MAX_WINDOW` and `length <= MAX_MATCH`;
    /// both are enforced by the writer's window check and the index's cap.
    #[inline]
    pub fn token(self) -> Token {
        debug_assert!(self.distance > 0 && self.distance <= MAX_WINDOW);
        debug_assert!(self.length >= MIN_MATCH && self.length <= MAX_MATCH);
        Token::Match { distance: self.distance as u16, length: self.length as u8 }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors produced by the codec core.
///
/// Every variant is fatal for the encode or decode call that raised it.
/// Bytes already flushed to the output before the failure stay written.
#[derive(Debug)]
pub enum Lz77Error {
    /// A buffer, table or dictionary could not be allocated.
    AllocationError { requested: usize },
    /// A size or window parameter is outside what the codec supports.
    InvalidArgument(&'static str),
    /// The underlying stream failed or accepted fewer bytes than offered.
    Io(io::Error),
    /// The encoded stream ended in the middle of a token.
    TruncatedToken { remaining: usize },
    /// A match refers further back than the decoded history allows.
    InvalidDistance { distance: usize, available: usize },
    /// A match token carries a length below [`MIN_MATCH`].
    InvalidLength(u8),
    /// A chunk observer asked the run loop to stop.
    Cancelled,
}

impl Lz77Error {
    /// Short stable name of the error kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Lz77Error::AllocationError { .. } => "allocation_error",
            Lz77Error::InvalidArgument(_) => "invalid_argument",
            Lz77Error::Io(_) => "io_error",
            Lz77Error::TruncatedToken { .. } => "truncated_token",
            Lz77Error::InvalidDistance { .. } => "invalid_distance",
            Lz77Error::InvalidLength(_) => "invalid_length",
            Lz77Error::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Lz77Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz77Error::AllocationError { requested } => {
                write!(f, "unable to allocate {} bytes", requested)
            }
            Lz77Error::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            Lz77Error::Io(e) => write!(f, "i/o error: {}", e),
            Lz77Error::TruncatedToken { remaining } => write!(
                f,
                "stream truncated: {} trailing byte(s) do not form a complete token",
                remaining
            ),
            Lz77Error::InvalidDistance { distance, available } => write!(
                f,
                "corrupt stream: match distance {} exceeds {} byte(s) of history",
                distance, available
            ),
            Lz77Error::InvalidLength(len) => {
                write!(f, "corrupt stream: match length {} is below the minimum", len)
            }
            Lz77Error::Cancelled => f.write_str("operation cancelled"),
        }
    }
}

impl std::error::Error for Lz77Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Lz77Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Lz77Error {
    fn from(e: io::Error) -> Self {
        Lz77Error::Io(e)
    }
}

impl From<Lz77Error> for io::Error {
    fn from(e: Lz77Error) -> Self {
        match e {
            Lz77Error::Io(inner) => inner,
            Lz77Error::InvalidArgument(_) => io::Error::new(io::ErrorKind::InvalidInput, e),
            Lz77Error::TruncatedToken { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, e),
            Lz77Error::InvalidDistance { .. } | Lz77Error::InvalidLength(_) => {
                io::Error::new(io::ErrorKind::InvalidData, e)
            }
            Lz77Error::AllocationError { .. } => io::Error::new(io::ErrorKind::OutOfMemory, e),
            Lz77Error::Cancelled => io::Error::new(io::ErrorKind::Interrupted, e),
        }
    }
}

/// Allocates a zeroed byte buffer, reporting failure instead of aborting.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<u8>, Lz77Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| Lz77Error::AllocationError { requested: len })?;
    v.resize(len, 0);
    Ok(v)
}
