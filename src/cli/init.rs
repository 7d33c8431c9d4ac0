//! CLI initialization and binary-alias detection.
//!
//! When installed under several names (`unlz77`, `lz77cat`) through hard or
//! symbolic links, the program picks its default mode from `argv[0]` before
//! any flag is parsed.  [`detect_alias`] returns a [`CliInit`] carrying
//! those defaults plus the environment overrides; the argument parser then
//! layers explicit flags on top.

use crate::cli::arg_utils::{exe_name_match, last_name_from_path};
use crate::cli::constants::{LZ77CAT, UNLZ77};
use crate::cli::op_mode::{init_nb_workers, init_window_size, OpMode};
use crate::io::file_io::STDOUT_MARK;
use crate::io::prefs::Prefs;

/// Initial CLI state derived from the binary name and environment.
#[derive(Debug, Clone)]
pub struct CliInit {
    /// Preferences with the environment window already applied.
    pub prefs: Prefs,
    pub op_mode: OpMode,
    /// Every positional argument is an input (`lz77cat`).
    pub multiple_inputs: bool,
    /// Worker count from `LZ77_NBWORKERS`; `0` means one per core.
    pub nb_workers: usize,
    /// Write to stdout even when it is a terminal.
    pub force_stdout: bool,
    pub output_filename: Option<String>,
    /// Display level the alias starts from, instead of the default 2.
    pub display_level_override: Option<u32>,
}

/// Detects the operation mode and initial settings from `argv[0]`.
///
/// | Binary name | Effect                                                   |
/// |-------------|----------------------------------------------------------|
/// | `lz77cat`   | Decompress + force stdout + multiple inputs + level 1    |
/// | `unlz77`    | Decompress                                               |
///
/// `argv0` may be a full path.
pub fn detect_alias(argv0: &str) -> CliInit {
    detect_alias_with(argv0, init_window_size(), init_nb_workers())
}

/// [`detect_alias`] with explicit environment values.
pub fn detect_alias_with(argv0: &str, env_window: Option<usize>, env_nb_workers: usize) -> CliInit {
    let exe_name = last_name_from_path(argv0);

    let mut prefs = Prefs::default();
    // Interactive invocations never clobber an existing file silently.
    prefs.set_overwrite(false);
    if let Some(window) = env_window {
        prefs.set_window_size(window);
    }

    let mut init = CliInit {
        prefs,
        op_mode: OpMode::Auto,
        multiple_inputs: false,
        nb_workers: env_nb_workers,
        force_stdout: false,
        output_filename: None,
        display_level_override: None,
    };

    if exe_name_match(exe_name, LZ77CAT) {
        init.op_mode = OpMode::Decompress;
        init.prefs.set_overwrite(true);
        init.prefs.set_remove_src_file(false);
        init.force_stdout = true;
        init.multiple_inputs = true;
        init.output_filename = Some(STDOUT_MARK.to_owned());
        init.display_level_override = Some(1);
    } else if exe_name_match(exe_name, UNLZ77) {
        init.op_mode = OpMode::Decompress;
    }

    init
}
