//! Filesystem access used by the listing engine.
//!
//! Everything the traversal needs from the operating system goes through the
//! [`FileSystem`] trait so listings can be built against an in-memory tree in
//! tests. [`OsFileSystem`] is the real implementation.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Type of a filesystem node as reported by stat or lstat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Directory,
    File,
    Symlink,
    /// Sockets, fifos, devices.
    Other,
}

impl From<fs::FileType> for NodeType {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            NodeType::Symlink
        } else if ft.is_dir() {
            NodeType::Directory
        } else if ft.is_file() {
            NodeType::File
        } else {
            NodeType::Other
        }
    }
}

/// Filesystem capability consumed by the traversal and the path canonicalizer.
pub trait FileSystem {
    /// Type of the node itself, without following a final symlink (lstat).
    fn symlink_metadata(&self, path: &Path) -> io::Result<NodeType>;

    /// Type of the node after following symlinks (stat).
    fn metadata(&self, path: &Path) -> io::Result<NodeType>;

    /// Names of the entries of a directory, excluding `.` and `..`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Absolute path with `.`, `..` and symlinks resolved (realpath).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Directory that relative start paths are resolved against.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Whether `path` resolves to an existing directory.
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(NodeType::Directory))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn symlink_metadata(&self, path: &Path) -> io::Result<NodeType> {
        (**self).symlink_metadata(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<NodeType> {
        (**self).metadata(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).read_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}

/// The operating system's filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn symlink_metadata(&self, path: &Path) -> io::Result<NodeType> {
        fs::symlink_metadata(path).map(|m| m.file_type().into())
    }

    fn metadata(&self, path: &Path) -> io::Result<NodeType> {
        fs::metadata(path).map(|m| m.file_type().into())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(e) => names.push(e.file_name()),
                Err(err) => {
                    log::warn!("Skipping unreadable entry in {}: {}", path.display(), err);
                }
            }
        }
        Ok(names)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
