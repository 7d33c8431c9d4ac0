//! Command-line interface for the `lz77` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, size multipliers, the shared `DISPLAY_LEVEL` and the display macros. |
//! | [`help`]      | Welcome banner, long help text, usage-error exits. |
//! | [`arg_utils`] | Executable-name matching and size parsing (`16K`, `1MiB`). |
//! | [`op_mode`]   | `OpMode`, extension-based mode inference, `LZ77_*` environment defaults. |
//! | [`init`]      | `CliInit`: initial state from the binary name (`unlz77`, `lz77cat`). |
//! | [`args`]      | clap flag definitions and `ParsedArgs`, the resolved runtime options. |
//!
//! Typical call sequence: `detect_alias` → `parse_args` → dispatch to the io layer.

pub mod constants;
pub mod help;
pub mod arg_utils;
pub mod op_mode;
pub mod init;
pub mod args;
