// Integration tests for cli/constants.rs: identity strings and the shared
// display level.

use lz77::cli::constants::{
    display_level, set_display_level, COMPRESSOR_NAME, DISPLAY_LEVEL_DEFAULT, KB, LZ77CAT,
    LZ77_EXTENSION, MB, UNLZ77, WELCOME_MESSAGE_FMT,
};

#[test]
fn identity() {
    assert_eq!(COMPRESSOR_NAME, "lz77");
    assert_eq!(LZ77_EXTENSION, ".lz77");
    assert_eq!(LZ77CAT, "lz77cat");
    assert_eq!(UNLZ77, "unlz77");
}

#[test]
fn welcome_format_has_three_slots() {
    assert_eq!(WELCOME_MESSAGE_FMT.matches("{}").count(), 3);
    assert!(WELCOME_MESSAGE_FMT.ends_with('\n'));
}

#[test]
fn multipliers() {
    assert_eq!(KB, 1024);
    assert_eq!(MB, KB * KB);
}

#[test]
fn display_level_is_shared_state() {
    assert_eq!(DISPLAY_LEVEL_DEFAULT, 2);
    let prev = display_level();
    set_display_level(0);
    assert_eq!(display_level(), 0);
    lz77::displaylevel!(1, "this line must not appear\n");
    set_display_level(prev);
    assert_eq!(display_level(), prev);
}
