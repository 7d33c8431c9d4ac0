// Integration tests for cli/arg_utils.rs: executable-name matching and size
// arguments.

use lz77::cli::arg_utils::{exe_name_match, last_name_from_path, parse_size, read_u32_from_str};

// ─────────────────────────────────────────────────────────────────────────────
// last_name_from_path / exe_name_match
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn last_name_handles_both_separators() {
    assert_eq!(last_name_from_path("/usr/local/bin/unlz77"), "unlz77");
    assert_eq!(last_name_from_path(r"C:\tools\lz77cat.exe"), "lz77cat.exe");
    assert_eq!(last_name_from_path("mixed/dir\\lz77"), "lz77");
    assert_eq!(last_name_from_path("lz77"), "lz77");
    assert_eq!(last_name_from_path("trailing/"), "");
}

#[test]
fn exe_name_allows_extension_only() {
    assert!(exe_name_match("lz77cat", "lz77cat"));
    assert!(exe_name_match("lz77cat.exe", "lz77cat"));
    assert!(!exe_name_match("lz77cats", "lz77cat"));
    assert!(!exe_name_match("xlz77cat", "lz77cat"));
    assert!(!exe_name_match("", "lz77cat"));
}

// ─────────────────────────────────────────────────────────────────────────────
// read_u32_from_str
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn plain_numbers_keep_the_remainder() {
    assert_eq!(read_u32_from_str("4096"), Some((4096, "")));
    assert_eq!(read_u32_from_str("12abc"), Some((12, "abc")));
    assert_eq!(read_u32_from_str("007"), Some((7, "")));
}

#[test]
fn suffix_spellings() {
    for s in ["64K", "64KB", "64KiB"] {
        assert_eq!(read_u32_from_str(s), Some((64 * 1024, "")), "{}", s);
    }
    for s in ["3M", "3MB", "3MiB"] {
        assert_eq!(read_u32_from_str(s), Some((3 * 1024 * 1024, "")), "{}", s);
    }
    assert_eq!(read_u32_from_str("2Kx"), Some((2048, "x")));
}

#[test]
fn overflow_and_non_digits_are_none() {
    assert_eq!(read_u32_from_str(""), None);
    assert_eq!(read_u32_from_str("K"), None);
    assert_eq!(read_u32_from_str("-1"), None);
    assert_eq!(read_u32_from_str("4294967296"), None);
    assert_eq!(read_u32_from_str("4096M"), None);
    assert_eq!(read_u32_from_str("4194304K"), None);
    assert_eq!(read_u32_from_str("4294967295"), Some((u32::MAX, "")));
}

// ─────────────────────────────────────────────────────────────────────────────
// parse_size
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_size_requires_whole_string() {
    assert_eq!(parse_size("16K"), Ok(16 * 1024));
    assert_eq!(parse_size("0"), Ok(0));
    assert!(parse_size("16Q").unwrap_err().contains("'Q'"));
    assert!(parse_size("big").unwrap_err().contains("not a valid size"));
}
