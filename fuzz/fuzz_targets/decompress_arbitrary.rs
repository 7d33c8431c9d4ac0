#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77::codec::CodecParams;

fuzz_target!(|data: &[u8]| {
    // Arbitrary token streams must fail cleanly, never panic.
    for window in [1usize, 64, 16 * 1024, 65_535] {
        let params = CodecParams::with_window(window);
        if let Ok(out) = lz77::decompress_to_vec(data, &params) {
            // Every token expands to at most 255 bytes.
            assert!(out.len() <= data.len() / 3 * 255);
        }
    }
});
