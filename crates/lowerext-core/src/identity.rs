//! Behavior-based detection of case-insensitive aliasing.
//!
//! No per-OS assumptions: two paths are treated as one entry only when the
//! filesystem itself says so.

use std::fs;
use std::io;
use std::path::Path;

/// True if `a` and `b` differ, but only in letter case.
pub fn differs_only_by_case(a: &Path, b: &Path) -> bool {
    if a.as_os_str() == b.as_os_str() {
        return false;
    }
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// True if the parent directory lists `path`'s file name byte-for-byte.
pub fn is_listed(path: &Path) -> io::Result<bool> {
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    for entry in fs::read_dir(parent)? {
        if entry?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True if both paths resolve to the same file (hard links included).
#[cfg(unix)]
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let ma = fs::symlink_metadata(a)?;
    let mb = fs::symlink_metadata(b)?;
    Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
}

/// True if both paths resolve to the same file (hard links included).
#[cfg(not(unix))]
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// True if `new` is just another spelling of the directory entry `old`:
/// the names differ only by case, `new` has no entry of its own, and the
/// filesystem still resolves it to `old`'s file.
///
/// Two hard links named `Foo.JPG` and `Foo.jpg` share a file but are two
/// entries, so they are not aliases.
pub fn aliases(old: &Path, new: &Path) -> io::Result<bool> {
    if !differs_only_by_case(old, new) || is_listed(new)? {
        return Ok(false);
    }
    same_file(old, new)
}
