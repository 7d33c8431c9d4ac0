// arg_utils.rs: executable-name matching and size-argument parsing.

use crate::cli::constants::{KB, MB};

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns `true` if `exe_path` is `name`, optionally followed by an
/// extension (`lz77cat.exe` matches `lz77cat`).
pub fn exe_name_match(exe_path: &str, name: &str) -> bool {
    match exe_path.strip_prefix(name) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// Parses an unsigned integer from the start of `s`, optionally followed by
/// a size suffix, and returns it with the unconsumed remainder.
///
/// Recognised suffixes: `K` / `KB` / `KiB` (×1024) and `M` / `MB` / `MiB`
/// (×1048576).  Returns `None` when `s` does not start with a digit or the
/// value overflows `u32`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: u32 = 0;
    for b in s[..digits].bytes() {
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }

    let mut rest = &s[digits..];
    let multiplier = match rest.as_bytes().first() {
        Some(b'K') => KB,
        Some(b'M') => MB,
        _ => 1,
    };
    if multiplier > 1 {
        value = u32::try_from(u64::from(value) * multiplier).ok()?;
        rest = &rest[1..];
        rest = rest.strip_prefix('i').unwrap_or(rest);
        rest = rest.strip_prefix('B').unwrap_or(rest);
    }
    Some((value, rest))
}

/// Parses a whole size argument such as `16K` or `4096`.
///
/// Used as a clap `value_parser`; trailing garbage is an error.
pub fn parse_size(s: &str) -> Result<usize, String> {
    match read_u32_from_str(s) {
        Some((value, "")) => Ok(value as usize),
        Some((_, rest)) => Err(format!("unexpected trailing characters '{}'", rest)),
        None => Err(format!("'{}' is not a valid size", s)),
    }
}
