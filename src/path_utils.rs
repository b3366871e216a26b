//! Resolving user-supplied paths against the current directory.

use std::path::{Path, PathBuf};

use crate::error::ListingError;
use crate::fs::FileSystem;

/// Join `raw` onto `current_dir` unless it is already absolute.
pub fn absolutize(raw: &Path, current_dir: &Path) -> PathBuf {
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        current_dir.join(raw)
    }
}

/// Resolve `raw` to a canonical absolute path.
///
/// Relative paths are taken relative to `current_dir`. `.`/`..` segments and
/// symlinks are resolved by the filesystem. Fails with
/// [`ListingError::InvalidPath`] if the target does not exist.
pub fn canonicalize<F: FileSystem + ?Sized>(
    fs: &F,
    raw: &Path,
    current_dir: &Path,
) -> Result<PathBuf, ListingError> {
    let joined = absolutize(raw, current_dir);
    fs.canonicalize(&joined)
        .map_err(|e| ListingError::invalid_path(raw, e))
}

/// Like [`canonicalize`], but the target must also be a directory.
pub fn canonicalize_dir<F: FileSystem + ?Sized>(
    fs: &F,
    raw: &Path,
    current_dir: &Path,
) -> Result<PathBuf, ListingError> {
    let path = canonicalize(fs, raw, current_dir)?;
    if !fs.is_dir(&path) {
        return Err(ListingError::NotADirectory { path });
    }
    Ok(path)
}
