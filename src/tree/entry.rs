//! Listing records

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Depth reserved for the synthetic parent entry.
pub const PARENT_DEPTH: isize = -1;

/// Kind of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// The synthetic "go up" entry.
    Parent,
    Directory,
    #[serde(rename = "file")]
    RegularFile,
    /// Exists but cannot be read, or a symlink whose target is missing.
    Inaccessible,
    /// Supplied from outside the filesystem (e.g. stdin), never inspected.
    Unknown,
}

impl EntryKind {
    /// Rank used when sorting by type: directories first, unknown entries last.
    pub fn rank(self) -> u8 {
        match self {
            EntryKind::Parent => 0,
            EntryKind::Directory => 1,
            EntryKind::RegularFile => 2,
            EntryKind::Inaccessible => 3,
            EntryKind::Unknown => 4,
        }
    }
}

/// One row of a [`FileListing`](crate::FileListing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub depth: isize,
}

impl FileEntry {
    pub fn new(path: PathBuf, name: impl Into<String>, kind: EntryKind, depth: isize) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
            depth,
        }
    }

    /// The "go up" entry for `current_dir`, labelled with `up_text`.
    pub fn parent(current_dir: &Path, up_text: &str) -> Self {
        let path = current_dir.parent().unwrap_or(current_dir).to_path_buf();
        Self::new(path, up_text, EntryKind::Parent, PARENT_DEPTH)
    }

    /// An entry supplied verbatim by the caller, resolved against `current_dir`.
    pub fn external(line: &str, current_dir: &Path) -> Self {
        let path = crate::path_utils::absolutize(Path::new(line), current_dir);
        let name = Path::new(line)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| line.to_string());
        Self::new(path, name, EntryKind::Unknown, 1)
    }

    pub fn is_parent(&self) -> bool {
        self.kind == EntryKind::Parent
    }
}
