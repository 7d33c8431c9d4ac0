//! Filesystem and platform helpers used by the `io` and `cli` layers.
//!
//! - [`cores`]:       physical core count for the default worker pool size
//! - [`file_status`]: regular-file / directory checks, attribute copying
//! - [`file_size`]:   size probing for progress display
//! - [`file_list`]:   recursive expansion of directory arguments

pub mod cores;
pub mod file_list;
pub mod file_size;
pub mod file_status;

// ── Re-exports at `util::` level ─────────────────────────────────────────────

pub use cores::count_cores;
pub use file_list::create_file_list;
pub use file_size::{get_file_size, get_open_file_size, get_total_file_size};
pub use file_status::{copy_file_stat, is_directory, is_reg_file, set_file_stat};
