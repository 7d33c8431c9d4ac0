#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77::codec::CodecParams;

fuzz_target!(|data: &[u8]| {
    // The first two bytes pick window and chunk sizes; the rest is payload.
    let (window, chunk, payload) = match data {
        [w, c, rest @ ..] => (1 + *w as usize * 256, 1 + *c as usize, rest),
        _ => return,
    };
    let params = CodecParams {
        compress_chunk_size: chunk,
        decompress_chunk_size: chunk.max(3),
        ..CodecParams::with_window(window)
    };

    let encoded = lz77::compress_to_vec(payload, &params).expect("compression failed");
    assert_eq!(encoded.len() % 3, 0, "encoded stream is not token aligned");

    let decoded = lz77::decompress_to_vec(&encoded, &params).expect("own output rejected");
    assert_eq!(decoded, payload, "round-trip mismatch with window {} chunk {}", window, chunk);
});
