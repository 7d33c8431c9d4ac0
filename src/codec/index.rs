//! Match index: hash table of bounded position chains keyed by 2-byte prefix.
//!
//! Each of the [`TABLE_SIZE`] buckets holds at most [`MAX_CHAIN`] absolute
//! stream positions, oldest first.  Inserting into a full bucket drops its
//! oldest entry; after each insertion, entries further back than the window
//! are pruned from the front of that bucket only.
//!
//! Distinct prefixes may share a bucket.  Candidates are always verified by
//! comparing bytes, so collisions only cost time.

use std::collections::VecDeque;

use super::chunk::ChunkBuffer;
use super::types::{Lz77Error, Match, MAX_CHAIN, MAX_MATCH, MIN_MATCH, TABLE_SIZE};

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV 32-bit prime.
const FNV_PRIME: u32 = 16_777_619;

/// Hashes a 2-byte prefix to a bucket id in `0..TABLE_SIZE`.
///
/// Multiply-then-xor per byte, starting from the FNV offset basis.
#[inline]
pub fn hash_prefix(prefix: [u8; 2]) -> usize {
    let mut h = FNV_OFFSET_BASIS;
    for b in prefix {
        h = h.wrapping_mul(FNV_PRIME) ^ b as u32;
    }
    (h as usize) % TABLE_SIZE
}

/// Reads the 2-byte prefix at arena index `pos`, if both bytes are loaded.
#[inline]
fn prefix_at(data: &[u8], pos: usize) -> Option<[u8; 2]> {
    match data.get(pos..pos + 2) {
        Some(&[a, b]) => Some([a, b]),
        _ => None,
    }
}

/// Owned hash-chain index.  One per encode call.
#[derive(Debug)]
pub struct MatchIndex {
    buckets: Vec<VecDeque<u64>>,
}

impl MatchIndex {
    /// Allocates [`TABLE_SIZE`] empty chains.
    ///
    /// Chains grow on first use, so an index over a small input stays small.
    pub fn new() -> Result<Self, Lz77Error> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(TABLE_SIZE).map_err(|_| Lz77Error::AllocationError {
            requested: TABLE_SIZE * std::mem::size_of::<VecDeque<u64>>(),
        })?;
        buckets.resize_with(TABLE_SIZE, VecDeque::new);
        Ok(MatchIndex { buckets })
    }

    /// Positions currently chained in `bucket`, oldest first.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = u64> + '_ {
        self.buckets[bucket].iter().copied()
    }

    /// Number of positions chained in `bucket`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets[bucket].len()
    }

    /// Appends the position at arena index `pos` to the chain of its prefix.
    ///
    /// A position with fewer than two loaded bytes cannot start a match and
    /// is not recorded.
    pub fn record(&mut self, chunk: &ChunkBuffer, pos: usize, window_size: usize) {
        let Some(prefix) = prefix_at(chunk.data(), pos) else {
            return;
        };
        let abs = chunk.absolute(pos);
        let chain = &mut self.buckets[hash_prefix(prefix)];

        if chain.len() >= MAX_CHAIN {
            chain.pop_front();
        }
        chain.push_back(abs);

        while let Some(&oldest) = chain.front() {
            if abs - oldest > window_size as u64 {
                chain.pop_front();
            } else {
                break;
            }
        }
    }

    /// Finds the longest match for the bytes at arena index `pos`.
    ///
    /// Candidates must lie strictly before `pos`, within `window_size` bytes,
    /// and still inside the arena.  Ties keep the first (oldest) candidate
    /// that reached the length.  Matches may overlap `pos`; the decoder
    /// resolves them byte by byte.  Returns `None` when no candidate reaches
    /// [`MIN_MATCH`] bytes.
    pub fn best_match(&self, chunk: &ChunkBuffer, pos: usize, window_size: usize) -> Option<Match> {
        let data = chunk.data();
        let prefix = prefix_at(data, pos)?;
        let abs = chunk.absolute(pos);
        let limit = (data.len() - pos).min(MAX_MATCH);

        let mut best: Option<Match> = None;
        for cand_abs in self.buckets[hash_prefix(prefix)].iter().copied() {
            if cand_abs >= abs || abs - cand_abs > window_size as u64 {
                continue;
            }
            let Some(cand) = chunk.index_of(cand_abs) else {
                continue;
            };

            let length = data[cand..]
                .iter()
                .zip(&data[pos..pos + limit])
                .take_while(|(a, b)| a == b)
                .count();

            if length >= MIN_MATCH && best.map_or(true, |m| length > m.length) {
                best = Some(Match { distance: (abs - cand_abs) as usize, length });
                if length == MAX_MATCH {
                    break;
                }
            }
        }
        best
    }
}
