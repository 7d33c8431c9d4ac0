// Integration tests for cli/args.rs: flags layered over the alias defaults.

use lz77::cli::args::{parse_args_from, ParsedArgs};
use lz77::cli::init::detect_alias_with;
use lz77::cli::op_mode::OpMode;
use lz77::codec::MAX_WINDOW;
use lz77::config::{COMPRESSED_BUFFER_SIZE, DECOMPRESSED_BUFFER_SIZE, WINDOW_SIZE};
use lz77::io::{STDIN_MARK, STDOUT_MARK};

fn parse_as(exe: &str, env_window: Option<usize>, args: &[&str]) -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    parse_args_from(detect_alias_with(exe, env_window, 0), exe, &argv)
}

fn parse(args: &[&str]) -> ParsedArgs {
    parse_as("lz77", None, args).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments() {
    let p = parse(&[]);
    assert_eq!(p.op_mode, OpMode::Auto);
    assert!(p.input_filename.is_none());
    assert!(p.output_filename.is_none());
    assert!(!p.prefs.overwrite);
    assert!(!p.prefs.remove_src_file);
    assert_eq!(p.prefs.window_size, WINDOW_SIZE);
    assert_eq!(p.prefs.compress_chunk_size, DECOMPRESSED_BUFFER_SIZE);
    assert_eq!(p.prefs.decompress_chunk_size, COMPRESSED_BUFFER_SIZE);
    assert!(!p.exit_early);
}

// ─────────────────────────────────────────────────────────────────────────────
// Modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn each_mode_flag() {
    assert_eq!(parse(&["-z", "f"]).op_mode, OpMode::Compress);
    assert_eq!(parse(&["--compress", "f"]).op_mode, OpMode::Compress);
    assert_eq!(parse(&["-d", "f"]).op_mode, OpMode::Decompress);
    assert_eq!(parse(&["--uncompress", "f"]).op_mode, OpMode::Decompress);
    assert_eq!(parse(&["-t", "f"]).op_mode, OpMode::Test);
    assert_eq!(parse(&["--list", "f"]).op_mode, OpMode::List);
}

#[test]
fn compress_flag_overrides_unlz77_alias() {
    let p = parse_as("unlz77", None, &["-z", "f"]).unwrap();
    assert_eq!(p.op_mode, OpMode::Compress);
}

#[test]
fn two_modes_conflict() {
    let err = parse_as("lz77", None, &["-t", "-l", "f"]).unwrap_err();
    assert!(err.to_string().starts_with("bad usage: "));
}

// ─────────────────────────────────────────────────────────────────────────────
// Filenames
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn double_dash_ends_options() {
    let p = parse(&["--", "-d", "-out"]);
    assert_eq!(p.op_mode, OpMode::Auto);
    assert_eq!(p.input_filename.as_deref(), Some("-d"));
    assert_eq!(p.output_filename.as_deref(), Some("-out"));
}

#[test]
fn extra_positional_is_ignored() {
    let p = parse(&["a", "b", "c"]);
    assert_eq!(p.input_filename.as_deref(), Some("a"));
    assert_eq!(p.output_filename.as_deref(), Some("b"));
    assert!(p.in_file_names.is_empty());
}

#[test]
fn multiple_collects_all_positionals() {
    let p = parse(&["-m", "a", "-", "c"]);
    assert!(p.multiple_inputs);
    assert_eq!(p.in_file_names, vec!["a", STDIN_MARK, "c"]);
    assert!(p.input_filename.is_none());
}

#[test]
fn stdout_flag_sets_output_and_force() {
    let p = parse(&["--stdout", "a"]);
    assert!(p.force_stdout);
    assert_eq!(p.output_filename.as_deref(), Some(STDOUT_MARK));
    assert_eq!(p.input_filename.as_deref(), Some("a"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn force_and_rm() {
    let p = parse(&["-f", "--rm", "a"]);
    assert!(p.prefs.overwrite);
    assert!(p.prefs.remove_src_file);
}

#[test]
fn window_flag_overrides_environment() {
    assert_eq!(parse_as("lz77", Some(100), &["a"]).unwrap().prefs.window_size, 100);
    let p = parse_as("lz77", Some(100), &["--window", "2K", "a"]).unwrap();
    assert_eq!(p.prefs.window_size, 2048);
}

#[test]
fn window_limits() {
    assert_eq!(parse(&["-W", "1", "a"]).prefs.window_size, 1);
    assert_eq!(parse(&["-W", "65535", "a"]).prefs.window_size, MAX_WINDOW);
    assert!(parse_as("lz77", None, &["-W", "65536", "a"]).is_err());
}

#[test]
fn minimal_buffers_are_accepted() {
    let p = parse(&["-B", "3", "--stage-size", "3", "a"]);
    assert_eq!(p.prefs.compress_chunk_size, 3);
    assert_eq!(p.prefs.compress_stage_size, 3);
    assert_eq!(p.prefs.codec_params().decompress_chunk_size, 3);
}

#[test]
fn threads_and_verbosity() {
    let p = parse(&["-T0", "-v", "-m", "a"]);
    assert_eq!(p.nb_workers, 0);
    assert_eq!(p.display_level, 3);
    assert_eq!(parse(&["-q", "a"]).display_level, 1);
}

#[test]
fn lz77cat_quiet_saturates() {
    let p = parse_as("lz77cat", None, &["-qq", "a"]).unwrap();
    assert_eq!(p.display_level, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Early exit and errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_requests_early_exit() {
    assert!(parse(&["--help"]).exit_early);
    assert!(parse(&["-h"]).exit_early);
    assert!(parse(&["-V"]).exit_early);
}

#[test]
fn bad_values_are_bad_usage() {
    for args in [&["-T", "many"][..], &["-B", "1x"][..], &["--window"][..], &["-x"][..]] {
        let err = parse_as("lz77", None, args).unwrap_err();
        assert!(err.to_string().starts_with("bad usage: "), "{:?}: {}", args, err);
    }
}
