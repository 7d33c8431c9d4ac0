// Integration tests for the match index: hashing, chain bounds, window
// pruning and candidate selection.

use std::io::Cursor;

use lz77::codec::{hash_prefix, ChunkBuffer, Match, MatchIndex, MAX_CHAIN, MAX_MATCH, TABLE_SIZE};

fn chunk_of(bytes: &[u8]) -> ChunkBuffer {
    ChunkBuffer::load(&mut Cursor::new(bytes.to_vec()), bytes.len().max(1)).unwrap()
}

fn record_upto(index: &mut MatchIndex, chunk: &ChunkBuffer, last: usize, window: usize) {
    for pos in 0..=last {
        index.record(chunk, pos, window);
    }
}

#[test]
fn hash_reference_values() {
    // Seed 2166136261; h = h * 16777619 ^ byte, per byte; then mod 65536.
    let mut h: u32 = 2_166_136_261;
    for b in [b'a', b'b'] {
        h = h.wrapping_mul(16_777_619) ^ u32::from(b);
    }
    assert_eq!(hash_prefix([b'a', b'b']), h as usize % TABLE_SIZE);
}

#[test]
fn new_index_is_empty() {
    let index = MatchIndex::new().unwrap();
    assert_eq!(index.chain_len(hash_prefix([1, 2])), 0);
}

#[test]
fn record_appends_absolute_positions_in_order() {
    let chunk = chunk_of(b"abab");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 3, 64);
    let chain: Vec<u64> = index.chain(hash_prefix(*b"ab")).collect();
    assert_eq!(chain, vec![0, 2]);
}

#[test]
fn last_byte_is_not_recorded() {
    let chunk = chunk_of(b"xy");
    let mut index = MatchIndex::new().unwrap();
    index.record(&chunk, 1, 64);
    let total: usize = (0..=255u8).map(|b| index.chain_len(hash_prefix([b'y', b]))).sum();
    assert_eq!(total, 0);
}

#[test]
fn chain_keeps_the_most_recent_entries() {
    let data = vec![b'z'; 200];
    let chunk = chunk_of(&data);
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 99, 1024);
    let chain: Vec<u64> = index.chain(hash_prefix(*b"zz")).collect();
    assert_eq!(chain.len(), MAX_CHAIN);
    assert_eq!(chain.first().copied(), Some(100 - MAX_CHAIN as u64));
    assert_eq!(chain.last().copied(), Some(99));
}

#[test]
fn entries_older_than_the_window_are_pruned() {
    let data = vec![b'q'; 64];
    let chunk = chunk_of(&data);
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 29, 10);
    let chain: Vec<u64> = index.chain(hash_prefix(*b"qq")).collect();
    assert_eq!(chain.first().copied(), Some(19));
    assert_eq!(chain.len(), 11);
}

#[test]
fn best_match_finds_repeat() {
    let chunk = chunk_of(b"abcabc");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 3, 64);
    assert_eq!(index.best_match(&chunk, 3, 64), Some(Match { distance: 3, length: 3 }));
}

#[test]
fn ties_keep_the_oldest_candidate() {
    let chunk = chunk_of(b"abXabYab");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 6, 64);
    assert_eq!(index.best_match(&chunk, 6, 64), Some(Match { distance: 6, length: 2 }));
}

#[test]
fn longer_later_candidate_wins() {
    let chunk = chunk_of(b"abQabcdabcd");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 7, 64);
    assert_eq!(index.best_match(&chunk, 7, 64), Some(Match { distance: 4, length: 4 }));
}

#[test]
fn overlapping_run_is_reported() {
    let chunk = chunk_of(b"aaaaaa");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 1, 64);
    assert_eq!(index.best_match(&chunk, 1, 64), Some(Match { distance: 1, length: 5 }));
}

#[test]
fn match_length_is_capped() {
    let data = vec![0x41u8; 600];
    let chunk = chunk_of(&data);
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 1, 1024);
    let m = index.best_match(&chunk, 1, 1024).unwrap();
    assert_eq!(m.length, MAX_MATCH);
    assert_eq!(m.distance, 1);
}

#[test]
fn candidates_beyond_the_window_are_ignored() {
    let mut data = b"ab".to_vec();
    data.extend_from_slice(&[b'x'; 20]);
    data.extend_from_slice(b"ab");
    let chunk = chunk_of(&data);
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 22, 10);
    assert_eq!(index.best_match(&chunk, 22, 10), None);
    let mut wide = MatchIndex::new().unwrap();
    record_upto(&mut wide, &chunk, 22, 64);
    assert_eq!(wide.best_match(&chunk, 22, 64), Some(Match { distance: 22, length: 2 }));
}

#[test]
fn no_match_without_prior_occurrence() {
    let chunk = chunk_of(b"abcdef");
    let mut index = MatchIndex::new().unwrap();
    record_upto(&mut index, &chunk, 3, 64);
    assert_eq!(index.best_match(&chunk, 3, 64), None);
}
