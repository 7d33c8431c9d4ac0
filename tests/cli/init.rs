// Integration tests for cli/init.rs: defaults picked from argv[0] and the
// environment.

use lz77::cli::init::detect_alias_with;
use lz77::cli::op_mode::OpMode;
use lz77::config::WINDOW_SIZE;
use lz77::io::STDOUT_MARK;

#[test]
fn plain_name_starts_in_auto_mode() {
    let init = detect_alias_with("/opt/bin/lz77", None, 0);
    assert_eq!(init.op_mode, OpMode::Auto);
    assert!(!init.multiple_inputs);
    assert!(!init.force_stdout);
    assert!(!init.prefs.overwrite);
    assert_eq!(init.prefs.window_size, WINDOW_SIZE);
    assert!(init.output_filename.is_none());
    assert!(init.display_level_override.is_none());
}

#[test]
fn unlz77_only_changes_mode() {
    let init = detect_alias_with("unlz77", None, 0);
    assert_eq!(init.op_mode, OpMode::Decompress);
    assert!(!init.force_stdout);
    assert!(init.output_filename.is_none());
}

#[test]
fn lz77cat_streams_everything_to_stdout() {
    let init = detect_alias_with(r"C:\bin\lz77cat.exe", None, 0);
    assert_eq!(init.op_mode, OpMode::Decompress);
    assert!(init.force_stdout);
    assert!(init.multiple_inputs);
    assert!(init.prefs.overwrite);
    assert!(!init.prefs.remove_src_file);
    assert_eq!(init.output_filename.as_deref(), Some(STDOUT_MARK));
    assert_eq!(init.display_level_override, Some(1));
}

#[test]
fn environment_values_are_carried() {
    let init = detect_alias_with("lz77", Some(1024), 3);
    assert_eq!(init.prefs.window_size, 1024);
    assert_eq!(init.nb_workers, 3);
}

#[test]
fn similar_names_are_not_aliases() {
    assert_eq!(detect_alias_with("unlz77x", None, 0).op_mode, OpMode::Auto);
    assert_eq!(detect_alias_with("lz77catalog", None, 0).op_mode, OpMode::Auto);
}
