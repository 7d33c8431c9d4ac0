// Integration tests for io preferences and their mapping onto codec
// parameters.

use lz77::codec::{CodecParams, MAX_WINDOW};
use lz77::config::{COMPRESSED_BUFFER_SIZE, DECOMPRESSED_BUFFER_SIZE, NB_WORKERS_MAX, WINDOW_SIZE};
use lz77::io::{default_nb_workers, Prefs};

#[test]
fn defaults_come_from_config() {
    let p = Prefs::new();
    assert_eq!(p.window_size, WINDOW_SIZE);
    assert_eq!(p.compress_stage_size, COMPRESSED_BUFFER_SIZE);
    assert_eq!(p.compress_chunk_size, DECOMPRESSED_BUFFER_SIZE);
    assert_eq!(p.decompress_stage_size, DECOMPRESSED_BUFFER_SIZE);
    assert_eq!(p.decompress_chunk_size, COMPRESSED_BUFFER_SIZE);
}

#[test]
fn codec_params_follow_setters() {
    let mut p = Prefs::new();
    p.set_window_size(MAX_WINDOW + 10);
    p.set_chunk_size(1000);
    p.set_stage_size(300);
    assert_eq!(
        p.codec_params(),
        CodecParams {
            compress_stage_size: 300,
            compress_chunk_size: 1000,
            decompress_stage_size: 300,
            decompress_chunk_size: 1000,
            window_size: MAX_WINDOW,
        }
    );
}

#[test]
fn flags_toggle() {
    let mut p = Prefs::new();
    assert!(!p.set_overwrite(false));
    assert!(p.set_test_mode(true));
    p.set_remove_src_file(true);
    assert!(!p.overwrite && p.test_mode && p.remove_src_file);
}

#[test]
fn default_workers_leave_headroom() {
    let n = default_nb_workers();
    assert!(n >= 1 && n <= NB_WORKERS_MAX);
}
