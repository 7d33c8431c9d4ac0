// cli/help.rs: welcome banner, long help text, and usage-error exits.
//
// The flag list itself is generated by clap from `args::Cli`; this module
// holds the prose clap cannot derive.

use crate::cli::constants::{display_level, COMPRESSOR_NAME, LZ77_EXTENSION, WELCOME_MESSAGE_FMT};
use crate::config::{ENV_NBWORKERS, ENV_WINDOW, WINDOW_SIZE};
use crate::io::file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

/// The `*** lz77 v… ***` banner.
pub fn welcome_message() -> String {
    let bits = std::mem::size_of::<*const ()>() * 8;
    WELCOME_MESSAGE_FMT
        .replacen("{}", COMPRESSOR_NAME, 1)
        .replacen("{}", &crate::version_string(), 1)
        .replacen("{}", &bits.to_string(), 1)
}

/// Text appended to `--help`: output naming rules, console protection,
/// aliases and environment variables.
pub fn long_help(program: &str) -> String {
    format!(
        "\
Which values can [output] have ?
  a filename, '{stdout}' or '-' for standard output, '{nul}' to discard output.
  When [output] is omitted:
    + reading from '{stdin}' (or '-') writes to standard output
    + compression writes to <input>{ext}
    + decompression writes to <input> without '{ext}'
      (an input without the '{ext}' extension is an error)

stdin, stdout and the console:
  {program} refuses to read from the console, and to write encoded data to
  the console unless '-c' is given.

The window size (-W, default {window}) is not stored in the stream: decode
with the same window that was used to encode.

Aliases:
  unlz77  : same as '{program} -d'
  lz77cat : same as '{program} -dcqm'

Environment:
  {env_window}    default window size
  {env_workers} default number of files processed concurrently (0 = one per core)

Example:
  generator | {program} | consumer",
        stdout = STDOUT_MARK,
        nul = NUL_MARK,
        stdin = STDIN_MARK,
        ext = LZ77_EXTENSION,
        program = program,
        window = WINDOW_SIZE,
        env_window = ENV_WINDOW,
        env_workers = ENV_NBWORKERS,
    )
}

/// Prints `msg` (level ≥ 1) and exits with code 1.
pub fn error_out(msg: &str) -> ! {
    if display_level() >= 1 {
        eprintln!("{} ", msg);
    }
    std::process::exit(1);
}

/// Reports a usage problem with a pointer to `--help` and exits with code 1.
pub fn print_bad_usage(program: &str, msg: &str) -> ! {
    if display_level() >= 1 {
        eprintln!("Incorrect parameters: {}", msg);
        eprintln!("Try '{} --help' for more information.", program);
    }
    std::process::exit(1);
}
