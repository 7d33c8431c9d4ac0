//! Source and destination opening for the file-level entry points.
//!
//! - [`open_src_file`] resolves a name to a buffered `Box<dyn Read>`,
//!   handling the `"stdin"` sentinel and rejecting directories.
//! - [`open_dst_file`] resolves a name to a [`DstFile`], handling the
//!   `"stdout"` and null-device sentinels and enforcing the overwrite policy
//!   from [`Prefs`].
//!
//! File and standard streams are wrapped in 64 KiB `BufReader`/`BufWriter`s;
//! the codec's own chunks are typically a few KiB.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use crate::cli::constants::display_level;
use crate::io::prefs::Prefs;
use crate::util::is_directory;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

const IO_BUFFER_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens `path` for reading.  `"stdin"` maps to standard input; a directory
/// is an [`io::ErrorKind::InvalidInput`] error.
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read + Send>> {
    if path == STDIN_MARK {
        if display_level() >= 4 {
            eprintln!("Using stdin for input");
        }
        return Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, io::stdin())));
    }

    if is_directory(Path::new(path)) {
        if display_level() >= 1 {
            eprintln!("lz77: {} is a directory -- ignored", path);
        }
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path).map_err(|e| {
        if display_level() >= 1 {
            eprintln!("{}: {}", path, e);
        }
        e
    })?;
    Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, f)))
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// A destination produced by [`open_dst_file`]: a regular file, stdout, or
/// a discard sink.
pub struct DstFile {
    inner: Box<dyn Write + Send>,
    pub is_stdout: bool,
    /// `true` when output goes to a freshly created regular file, i.e. when
    /// the source's attributes should be copied onto it afterwards.
    pub is_regular: bool,
}

impl DstFile {
    /// A destination that drops everything written to it (test mode).
    pub fn sink() -> Self {
        DstFile { inner: Box::new(io::sink()), is_stdout: false, is_regular: false }
    }
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Asks on stderr whether `path` may be overwritten; `true` on `y`/`Y`.
fn confirm_overwrite(path: &str) -> io::Result<bool> {
    eprint!("{} already exists; do you want to overwrite (y/N) ? ", path);
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim_start().chars().next(), Some('y') | Some('Y')))
}

/// Opens `path` for writing.
///
/// `"stdout"` maps to standard output and [`NUL_MARK`] to a sink.  When
/// `prefs.overwrite` is off and the file exists, the call fails with
/// [`io::ErrorKind::AlreadyExists`] at display level ≤ 1 or when stdin is
/// not a terminal, and asks interactively otherwise.
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        if display_level() >= 4 {
            eprintln!("Using stdout for output");
        }
        return Ok(DstFile {
            inner: Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, io::stdout())),
            is_stdout: true,
            is_regular: false,
        });
    }

    if path == NUL_MARK {
        return Ok(DstFile::sink());
    }

    if !prefs.overwrite && Path::new(path).exists() {
        let refused = if display_level() <= 1 || !io::stdin().is_terminal() {
            if display_level() >= 1 {
                eprintln!("{} already exists; not overwritten  ", path);
            }
            true
        } else if !confirm_overwrite(path)? {
            eprintln!("    not overwritten  ");
            true
        } else {
            false
        };
        if refused {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: already exists; not overwritten", path),
            ));
        }
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            if display_level() >= 1 {
                eprintln!("{}: {}", path, e);
            }
            e
        })?;

    Ok(DstFile {
        inner: Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, f)),
        is_stdout: false,
        is_regular: true,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
