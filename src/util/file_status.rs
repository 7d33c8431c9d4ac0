//! File status helpers.
//!
//! After a successful file-to-file operation the destination inherits the
//! source's modification time and permission bits ([`copy_file_stat`]).
//! Timestamps go through the `filetime` crate; ownership uses `nix` and is
//! POSIX-only.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filetime::FileTime;

/// Applies `mtime`, ownership and permission bits to the regular file at
/// `path`.
///
/// Fails if `path` is not a regular file, or if the timestamp or permission
/// update fails.  Changing ownership requires privileges the caller usually
/// lacks when the owner differs, so a refused `chown` is ignored.
pub fn set_file_stat(path: &Path, mtime: SystemTime, uid: u32, gid: u32, mode: u32) -> io::Result<()> {
    if !is_reg_file(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        ));
    }

    let atime = FileTime::from_system_time(SystemTime::now());
    filetime::set_file_times(path, atime, FileTime::from_system_time(mtime))?;

    #[cfg(unix)]
    {
        use nix::unistd::{chown, Gid, Uid};
        use std::os::unix::fs::PermissionsExt;

        match chown(path, Some(Uid::from_raw(uid)), Some(Gid::from_raw(gid))) {
            Ok(()) | Err(nix::errno::Errno::EPERM) => {}
            Err(e) => return Err(io::Error::from(e)),
        }
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (uid, gid);
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_readonly(mode & 0o200 == 0);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Copies `src`'s modification time, ownership and permissions onto `dst`.
pub fn copy_file_stat(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mtime = meta.modified()?;

    #[cfg(unix)]
    let (uid, gid, mode) = {
        use std::os::unix::fs::MetadataExt;
        (meta.uid(), meta.gid(), meta.mode())
    };
    #[cfg(not(unix))]
    let (uid, gid, mode) = (0, 0, if meta.permissions().readonly() { 0o444 } else { 0o644 });

    set_file_stat(dst, mtime, uid, gid, mode)
}

/// `true` if `path` exists and is a regular file (symlinks are followed).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.file_type().is_file()).unwrap_or(false)
}

/// `true` if `path` exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.file_type().is_dir()).unwrap_or(false)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
