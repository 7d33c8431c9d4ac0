//! Token statistics for the `--list` flag.
//!
//! Walks the token stream of one or more `.lz77` files without producing
//! output and prints, per file: token count, literal and match counts,
//! encoded and decoded sizes, ratio, and (verbose) the longest match and the
//! farthest back-reference.
//!
//! Entry point: [`display_compressed_files_info`].

use std::io::Read;
use std::path::Path;

use crate::cli::constants::display_level;
use crate::codec::{ChunkBuffer, Lz77Error, Token, MIN_MATCH, TOKEN_SIZE};
use crate::io::file_io::{open_src_file, STDIN_MARK};
use crate::io::prefs::Prefs;
use crate::util::is_reg_file;

// ---------------------------------------------------------------------------
// CompressedFileInfo
// ---------------------------------------------------------------------------

/// Aggregate statistics for one encoded stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressedFileInfo {
    pub file_name: String,
    /// Encoded size in bytes.
    pub file_size: u64,
    pub literals: u64,
    pub matches: u64,
    /// Size of the stream once decoded.
    pub decoded_size: u64,
    pub longest_match: usize,
    pub farthest_distance: usize,
}

impl CompressedFileInfo {
    pub fn tokens(&self) -> u64 {
        self.literals + self.matches
    }

    /// Encoded size as a percentage of the decoded size, `None` for an
    /// empty stream.
    pub fn ratio(&self) -> Option<f64> {
        if self.decoded_size == 0 {
            None
        } else {
            Some(self.file_size as f64 / self.decoded_size as f64 * 100.0)
        }
    }

    fn account(&mut self, token: Token, window_size: usize) -> Result<(), Lz77Error> {
        match token {
            Token::Literal(_) => self.literals += 1,
            Token::Match { distance, length } => {
                let (distance, length) = (distance as usize, length as usize);
                if length < MIN_MATCH {
                    return Err(Lz77Error::InvalidLength(length as u8));
                }
                let available = self.decoded_size.min(window_size as u64) as usize;
                if distance > available {
                    return Err(Lz77Error::InvalidDistance { distance, available });
                }
                self.matches += 1;
                self.longest_match = self.longest_match.max(length);
                self.farthest_distance = self.farthest_distance.max(distance);
            }
        }
        self.decoded_size += token.decoded_len() as u64;
        self.file_size += TOKEN_SIZE as u64;
        Ok(())
    }
}

/// Scans a whole token stream, validating every token against the bytes a
/// decoder with `window_size` of history would have available.
///
/// Fails on a trailing partial token like the decoder does.
pub fn scan_token_stream<R: Read + ?Sized>(
    input: &mut R,
    chunk_size: usize,
    window_size: usize,
) -> Result<CompressedFileInfo, Lz77Error> {
    let mut info = CompressedFileInfo::default();
    let mut chunk = ChunkBuffer::load(input, chunk_size.max(TOKEN_SIZE))?;
    loop {
        while let Some(&[a, b, c]) = chunk.unread().get(..TOKEN_SIZE) {
            info.account(Token::from_bytes([a, b, c]), window_size)?;
            chunk.advance(TOKEN_SIZE);
        }
        let leftover = chunk.remaining();
        if chunk.slide(input)? == 0 {
            if leftover > 0 {
                return Err(Lz77Error::TruncatedToken { remaining: leftover });
            }
            return Ok(info);
        }
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Formats a byte count with the largest binary prefix that keeps it ≥ 1,
/// e.g. `"3.14M"`.
fn to_human(size: u64) -> String {
    const UNITS: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];
    let mut value = size as f64;
    let mut i = 0;
    while value >= 1024.0 && i + 1 < UNITS.len() {
        value /= 1024.0;
        i += 1;
    }
    format!("{:.2}{}", value, UNITS[i])
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

// ---------------------------------------------------------------------------
// display_compressed_files_info
// ---------------------------------------------------------------------------

/// Prints a summary row per file (and detail lines at display level ≥ 3).
///
/// Stops at the first file that is not a regular file or whose token stream
/// is invalid.
pub fn display_compressed_files_info(paths: &[&str], prefs: &Prefs) -> std::io::Result<()> {
    let verbose = display_level() >= 3;

    crate::displayout!(
        "{:>10} {:>10} {:>10} {:>11} {:>13} {:>8}   {}\n",
        "Tokens", "Literals", "Matches", "Compressed", "Uncompressed", "Ratio", "Filename"
    );

    for &path in paths {
        if path != STDIN_MARK && !is_reg_file(Path::new(path)) {
            if display_level() >= 1 {
                eprintln!("lz77: {} is not a regular file", path);
            }
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path),
            ));
        }

        let mut reader = open_src_file(path)?;
        let mut info = scan_token_stream(&mut reader, prefs.decompress_chunk_size, prefs.window_size)
            .map_err(|e| {
                if display_level() >= 1 {
                    eprintln!("lz77: {}: {}", path, e);
                }
                std::io::Error::from(e)
            })?;
        info.file_name = base_name(path).to_owned();

        let ratio = match info.ratio() {
            Some(r) => format!("{:.2}%", r),
            None => "-".to_owned(),
        };
        crate::displayout!(
            "{:>10} {:>10} {:>10} {:>11} {:>13} {:>8}   {}\n",
            info.tokens(),
            info.literals,
            info.matches,
            to_human(info.file_size),
            to_human(info.decoded_size),
            ratio,
            info.file_name,
        );
        if verbose {
            crate::displayout!(
                "    longest match {} bytes, farthest distance {} bytes\n",
                info.longest_match, info.farthest_distance
            );
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
