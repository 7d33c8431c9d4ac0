//! Command-line argument parsing for the `lz77` / `unlz77` / `lz77cat` family.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit tests).
//! Both return a [`ParsedArgs`] capturing every option and filename.
//!
//! Flags are declared with clap's derive API on [`Cli`]; short options may be
//! aggregated (`-dcf`) and `--` ends option parsing.  The positional
//! `[input] [output]` convention and the alias defaults from [`CliInit`] are
//! resolved here rather than by clap.
//!
//! Bad options return an `Err` whose message begins with `"bad usage: "`.

use anyhow::{anyhow, bail};
use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, CommandFactory, FromArgMatches, Parser};

use crate::cli::arg_utils::{last_name_from_path, parse_size};
use crate::cli::constants::DISPLAY_LEVEL_DEFAULT;
use crate::cli::help::long_help;
use crate::cli::init::CliInit;
use crate::cli::op_mode::OpMode;
use crate::codec::{MAX_WINDOW, TOKEN_SIZE};
use crate::displaylevel;
use crate::io::file_io::{STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;

/// Raw flags as clap sees them.
#[derive(Parser, Debug)]
#[command(
    name = "lz77",
    version = crate::LZ77_VERSION_STRING,
    about = "Streaming LZ77 compressor with fixed 3-byte tokens",
    group(ArgGroup::new("mode").args(["compress", "decompress", "test", "list"]))
)]
pub struct Cli {
    /// Force compression
    #[arg(short = 'z', long)]
    pub compress: bool,
    /// Decompression (default for .lz77 extension)
    #[arg(short, long, visible_alias = "uncompress")]
    pub decompress: bool,
    /// Test compressed file integrity; nothing is written
    #[arg(short, long)]
    pub test: bool,
    /// List token statistics of .lz77 files
    #[arg(short, long)]
    pub list: bool,
    /// Force write to standard output, even if it is the console
    #[arg(short = 'c', long = "stdout", visible_alias = "to-stdout")]
    pub stdout: bool,
    /// Overwrite output without prompting
    #[arg(short, long)]
    pub force: bool,
    /// Preserve source file(s) (default)
    #[arg(short, long, overrides_with = "rm")]
    pub keep: bool,
    /// Remove source file(s) after successful de/compression
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,
    /// Multiple input files (implies automatic output filenames)
    #[arg(short, long)]
    pub multiple: bool,
    /// Operate recursively on directories (implies -m)
    #[arg(short, long)]
    pub recursive: bool,
    /// Verbose mode; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Suppress warnings; specify twice to suppress errors too
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Sliding window in bytes, 1..=65535; K/M suffixes accepted
    #[arg(short = 'W', long = "window", value_name = "BYTES", value_parser = parse_size)]
    pub window: Option<usize>,
    /// Input chunk size in bytes
    #[arg(short = 'B', long = "chunk-size", value_name = "BYTES", value_parser = parse_size)]
    pub chunk_size: Option<usize>,
    /// Output staging buffer size in bytes
    #[arg(long = "stage-size", value_name = "BYTES", value_parser = parse_size)]
    pub stage_size: Option<usize>,
    /// Files processed concurrently with -m (0 = one per core)
    #[arg(short = 'T', long = "threads", value_name = "N")]
    pub threads: Option<usize>,
    /// [input] [output], or every input with -m
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Complete set of options and filenames produced by argument parsing.
#[derive(Debug)]
pub struct ParsedArgs {
    pub prefs: Prefs,
    pub op_mode: OpMode,
    /// Write to stdout even if it is a terminal.
    pub force_stdout: bool,
    /// Every positional argument is an input.
    pub multiple_inputs: bool,
    /// Expand directories among the inputs.
    pub recursive: bool,
    /// Requested worker count; `0` means one per core.
    pub nb_workers: usize,
    /// Single input (non-multiple mode).
    pub input_filename: Option<String>,
    /// Single output (non-multiple mode), or `stdout` with `-c`.
    pub output_filename: Option<String>,
    /// Inputs collected in multiple-input mode.
    pub in_file_names: Vec<String>,
    /// Display level after `-v` / `-q`; the caller applies it.
    pub display_level: u32,
    /// `--help` or `--version` was handled; the caller should exit 0.
    pub exit_early: bool,
    /// argv[0] basename, for messages.
    pub exe_name: String,
}

impl ParsedArgs {
    fn from_init(init: CliInit, exe_name: &str) -> Self {
        ParsedArgs {
            prefs: init.prefs,
            op_mode: init.op_mode,
            force_stdout: init.force_stdout,
            multiple_inputs: init.multiple_inputs,
            recursive: false,
            nb_workers: init.nb_workers,
            input_filename: None,
            output_filename: init.output_filename,
            in_file_names: Vec::new(),
            display_level: init.display_level_override.unwrap_or(DISPLAY_LEVEL_DEFAULT),
            exit_early: false,
            exe_name: exe_name.to_owned(),
        }
    }
}

/// Parses `std::env::args()` (skipping argv[0]) using `init` as the starting state.
pub fn parse_args(init: CliInit) -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(init, &exe_name, &argv)
}

/// Parses an explicit argument list using `init` as the starting state.
///
/// `exe_name` is argv[0]; `argv` is argv[1..].
pub fn parse_args_from(init: CliInit, exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let program = last_name_from_path(exe_name).to_owned();
    let mut parsed = ParsedArgs::from_init(init, &program);

    let command = Cli::command()
        .bin_name(program.clone())
        .after_long_help(long_help(&program));
    let matches = match command.try_get_matches_from(std::iter::once(program.clone()).chain(argv.iter().cloned())) {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            parsed.exit_early = true;
            return Ok(parsed);
        }
        Err(e) => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            bail!("bad usage: {}", first.trim_start_matches("error: "));
        }
    };
    let cli = Cli::from_arg_matches(&matches).map_err(|e| anyhow!("bad usage: {}", e))?;

    apply_flags(&mut parsed, &cli)?;
    assign_filenames(&mut parsed, cli.files);
    Ok(parsed)
}

fn apply_flags(parsed: &mut ParsedArgs, cli: &Cli) -> anyhow::Result<()> {
    if cli.compress {
        parsed.op_mode = OpMode::Compress;
    }
    if cli.decompress {
        parsed.op_mode = OpMode::Decompress;
    }
    if cli.test {
        parsed.op_mode = OpMode::Test;
    }
    if cli.list {
        parsed.op_mode = OpMode::List;
        parsed.multiple_inputs = true;
    }

    if cli.stdout {
        parsed.force_stdout = true;
        parsed.output_filename = Some(STDOUT_MARK.to_owned());
    }
    if cli.force {
        parsed.prefs.set_overwrite(true);
    }
    if cli.rm {
        parsed.prefs.set_remove_src_file(true);
    } else if cli.keep {
        parsed.prefs.set_remove_src_file(false);
    }
    if cli.multiple {
        parsed.multiple_inputs = true;
    }
    if cli.recursive {
        parsed.recursive = true;
        parsed.multiple_inputs = true;
    }

    parsed.display_level = (parsed.display_level + u32::from(cli.verbose)).saturating_sub(u32::from(cli.quiet));

    if let Some(window) = cli.window {
        if window == 0 || window > MAX_WINDOW {
            bail!("bad usage: window size must be between 1 and {} bytes (got {})", MAX_WINDOW, window);
        }
        parsed.prefs.set_window_size(window);
    }
    if let Some(chunk) = cli.chunk_size {
        if chunk < TOKEN_SIZE {
            bail!("bad usage: chunk size must be at least {} bytes", TOKEN_SIZE);
        }
        parsed.prefs.set_chunk_size(chunk);
    }
    if let Some(stage) = cli.stage_size {
        if stage < TOKEN_SIZE {
            bail!("bad usage: stage size must be at least {} bytes", TOKEN_SIZE);
        }
        parsed.prefs.set_stage_size(stage);
    }
    if let Some(threads) = cli.threads {
        parsed.nb_workers = threads;
    }
    Ok(())
}

/// Distributes positional arguments: every one is an input in multiple-input
/// mode; otherwise the first is the input and the second the output.  `-`
/// stands for stdin as input and stdout as output.
fn assign_filenames(parsed: &mut ParsedArgs, files: Vec<String>) {
    for file in files {
        if parsed.multiple_inputs {
            if file == "-" {
                parsed.in_file_names.push(STDIN_MARK.to_owned());
            } else {
                parsed.in_file_names.push(file);
            }
            continue;
        }

        if parsed.input_filename.is_none() {
            parsed.input_filename = Some(if file == "-" { STDIN_MARK.to_owned() } else { file });
        } else if parsed.output_filename.is_none() {
            parsed.output_filename = Some(if file == "-" { STDOUT_MARK.to_owned() } else { file });
        } else {
            displaylevel!(
                1,
                "Warning : {} won't be used ! Do you want multiple input files (-m) ? \n",
                file
            );
        }
    }
}
