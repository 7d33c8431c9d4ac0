//! Operation mode selection and environment-provided startup defaults.
//!
//! - [`OpMode`]: what the CLI should do with its inputs.
//! - [`determine_op_mode`]: infers the mode from a filename's extension.
//! - [`init_window_size`] / [`init_nb_workers`]: read `LZ77_WINDOW` and
//!   `LZ77_NBWORKERS`.

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::constants::{display_level, LZ77_EXTENSION};
use crate::codec::MAX_WINDOW;
use crate::config::{ENV_NBWORKERS, ENV_WINDOW, NB_WORKERS_DEFAULT};

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decompress if the input ends with `.lz77`, compress otherwise.
    Auto,
    Compress,
    Decompress,
    /// Decode and discard the output.
    Test,
    /// Print token statistics of encoded files.
    List,
}

/// Returns [`OpMode::Decompress`] if `filename` ends with `.lz77`,
/// [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(LZ77_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

fn warn_ignored(name: &str, value: &str, reason: &str) {
    if display_level() >= 2 {
        eprintln!("Ignore environment variable setting {}={}: {} ", name, value, reason);
    }
}

/// Window size from `LZ77_WINDOW`, or `None` when unset or unusable.
pub fn init_window_size() -> Option<usize> {
    init_window_size_from(std::env::var(ENV_WINDOW).ok().as_deref())
}

/// Parses an optional `LZ77_WINDOW` value.  Sizes accept `K`/`M` suffixes;
/// values outside `1..=65535` are ignored with a warning.
pub fn init_window_size_from(env_val: Option<&str>) -> Option<usize> {
    let env = env_val?;
    match read_u32_from_str(env) {
        Some((val, "")) if (1..=MAX_WINDOW).contains(&(val as usize)) => Some(val as usize),
        Some((_, "")) => {
            warn_ignored(ENV_WINDOW, env, "window must be between 1 and 65535");
            None
        }
        _ => {
            warn_ignored(ENV_WINDOW, env, "not a valid unsigned value");
            None
        }
    }
}

/// Worker count from `LZ77_NBWORKERS`; `0` means one worker per core.
pub fn init_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Parses an optional `LZ77_NBWORKERS` value, falling back to
/// [`NB_WORKERS_DEFAULT`].
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val as usize;
        }
        warn_ignored(ENV_NBWORKERS, env, "not a valid unsigned value");
    }
    NB_WORKERS_DEFAULT
}
