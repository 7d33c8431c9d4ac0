//! Binary entry point for the `lz77` command-line tool.
//!
//! Handles post-parse validation, recursive directory expansion, automatic
//! output filename resolution, and dispatch to compress, decompress, test
//! or list.
//!
//! # Control flow
//!
//! 1. [`detect_alias`] inspects `argv[0]` to infer an initial mode
//!    (`unlz77` implies decompress).
//! 2. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 3. [`run`] dispatches to the io layer and returns an exit code.

use std::io::IsTerminal;
use std::path::Path;

use lz77::cli::args::{parse_args, ParsedArgs};
use lz77::cli::constants::{display_level, set_display_level, LZ77_EXTENSION};
use lz77::cli::help::{print_bad_usage, welcome_message};
use lz77::cli::init::detect_alias;
use lz77::cli::op_mode::{determine_op_mode, OpMode};
use lz77::config::NB_WORKERS_MAX;
use lz77::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, default_nb_workers, display_compressed_files_info,
    set_notification_level, NUL_MARK, STDIN_MARK, STDOUT_MARK,
};

/// Executes the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = at least one failure).
fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs {
        mut prefs,
        mut op_mode,
        force_stdout,
        mut multiple_inputs,
        recursive,
        nb_workers,
        mut input_filename,
        mut output_filename,
        mut in_file_names,
        display_level: requested_level,
        exit_early: _,
        exe_name,
    } = args;

    set_display_level(requested_level);
    lz77::displaylevel!(3, "{}", welcome_message());
    lz77::displaylevel!(4, "Window size : {} bytes\n", prefs.window_size);

    // ── Multiple inputs ─────────────────────────────────────────────────────
    if multiple_inputs {
        if recursive {
            let paths: Vec<&Path> = in_file_names.iter().map(Path::new).collect();
            match lz77::util::create_file_list(&paths) {
                Ok(list) => {
                    for (u, p) in list.iter().enumerate() {
                        lz77::displaylevel!(4, "{} {}\n", u, p.display());
                    }
                    in_file_names = list
                        .into_iter()
                        .map(|p| p.to_string_lossy().into_owned())
                        .collect();
                }
                Err(e) => {
                    lz77::displaylevel!(1, "{}: {}\n", exe_name, e);
                    return 1;
                }
            }
        }
        if let Some(first) = in_file_names.first() {
            input_filename = Some(first.clone());
        }
    }

    // ── Test mode decodes to the null device ────────────────────────────────
    if op_mode == OpMode::Test {
        prefs.set_test_mode(true);
        output_filename = Some(NUL_MARK.to_owned());
        op_mode = OpMode::Decompress;
    }

    let input_filename: String = input_filename.unwrap_or_else(|| STDIN_MARK.to_owned());

    if input_filename == STDIN_MARK && std::io::stdin().is_terminal() {
        lz77::displaylevel!(1, "refusing to read from a console\n");
        return 1;
    }

    if input_filename == STDIN_MARK && output_filename.is_none() {
        output_filename = Some(STDOUT_MARK.to_owned());
    }

    // ── Output filename from the input's extension ──────────────────────────
    if output_filename.is_none() && !multiple_inputs {
        if op_mode == OpMode::Auto {
            op_mode = determine_op_mode(&input_filename);
        }
        if op_mode == OpMode::Compress {
            let out = format!("{}{}", input_filename, LZ77_EXTENSION);
            lz77::displaylevel!(2, "Compressed filename will be : {} \n", out);
            output_filename = Some(out);
        } else if op_mode == OpMode::Decompress {
            match input_filename.strip_suffix(LZ77_EXTENSION) {
                Some(base) if !base.is_empty() => {
                    lz77::displaylevel!(2, "Decoding file {} \n", base);
                    output_filename = Some(base.to_owned());
                }
                _ => print_bad_usage(&exe_name, "Cannot determine an output filename"),
            }
        }
    }

    if op_mode == OpMode::List && in_file_names.is_empty() {
        in_file_names.push(input_filename.clone());
    }

    // Multiple-input runs derive each destination from its source.
    let output_filename: String = output_filename.unwrap_or_default();

    if output_filename == STDOUT_MARK
        && op_mode != OpMode::List
        && std::io::stdout().is_terminal()
        && !force_stdout
    {
        lz77::displaylevel!(1, "refusing to write to console without -c \n");
        return 1;
    }

    // ── Keep progress out of piped data ─────────────────────────────────────
    if output_filename == STDOUT_MARK && display_level() == 2 {
        set_display_level(1);
    }
    if multiple_inputs && display_level() == 2 {
        set_display_level(1);
    }

    if op_mode == OpMode::Auto {
        op_mode = determine_op_mode(&input_filename);
    }

    set_notification_level(display_level());
    if in_file_names.is_empty() {
        multiple_inputs = false;
    }

    // ── Worker count ────────────────────────────────────────────────────────
    if multiple_inputs {
        let mut nb = if nb_workers == 0 { default_nb_workers() } else { nb_workers };
        if nb > NB_WORKERS_MAX {
            lz77::displaylevel!(
                3,
                "Requested {} workers too large => automatically reduced to {} \n",
                nb,
                NB_WORKERS_MAX
            );
            nb = NB_WORKERS_MAX;
        } else {
            lz77::displaylevel!(4, "Using {} workers \n", nb);
        }
        prefs.set_nb_workers(nb);
    }

    let srcs: Vec<&str> = in_file_names.iter().map(String::as_str).collect();

    // ── Dispatch ────────────────────────────────────────────────────────────
    match op_mode {
        OpMode::List => match display_compressed_files_info(&srcs, &prefs) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        OpMode::Decompress if multiple_inputs => {
            let dec_extension: &str = if output_filename == STDOUT_MARK {
                STDOUT_MARK
            } else if output_filename == NUL_MARK {
                NUL_MARK
            } else {
                LZ77_EXTENSION
            };
            match decompress_multiple_filenames(&srcs, dec_extension, &prefs) {
                Ok(0) => 0,
                _ => 1,
            }
        }
        OpMode::Decompress => match decompress_filename(&input_filename, &output_filename, &prefs) {
            Ok(_) => 0,
            Err(_) => 1,
        },
        _ if multiple_inputs => {
            let comp_ext: &str = if output_filename == STDOUT_MARK {
                STDOUT_MARK
            } else {
                LZ77_EXTENSION
            };
            match compress_multiple_filenames(&srcs, comp_ext, &prefs) {
                Ok(0) => 0,
                _ => 1,
            }
        }
        _ => match compress_filename(&input_filename, &output_filename, &prefs) {
            Ok(_) => 0,
            Err(_) => 1,
        },
    }
}

fn main() {
    let argv0 = std::env::args().next().unwrap_or_else(|| "lz77".to_owned());
    let init = detect_alias(&argv0);

    let args = match parse_args(init) {
        Ok(a) => a,
        Err(e) => {
            lz77::display!("lz77: {}\n", e);
            std::process::exit(1);
        }
    };

    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
