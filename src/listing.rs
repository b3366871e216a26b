//! The file listing of a browsing session.
//!
//! A [`FileListing`] owns the current directory, the listing policy and the
//! ordered entries. Every reload rebuilds the entries from scratch and swaps
//! them in as a whole, so readers only ever see a complete listing.

use std::path::{Path, PathBuf};

use crate::error::ListingError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::path_utils::canonicalize_dir;
use crate::tree::{FileEntry, GlobFilter, ListingPolicy, TreeWalker, sort_entries};

pub struct FileListing<F = OsFileSystem> {
    fs: F,
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    policy: ListingPolicy,
    excludes: GlobFilter,
}

impl FileListing<OsFileSystem> {
    /// Open a listing of `start_dir` on the real filesystem.
    ///
    /// Relative paths are resolved against the process working directory.
    pub fn initialize(start_dir: impl AsRef<Path>, policy: ListingPolicy) -> Result<Self, ListingError> {
        Self::with_filesystem(OsFileSystem, start_dir, policy)
    }
}

impl<F: FileSystem> FileListing<F> {
    /// Open a listing of `start_dir` on `fs` and load it.
    ///
    /// A relative `start_dir` is resolved against [`FileSystem::current_dir`].
    /// Fails with [`ListingError::InvalidStartDirectory`] if `start_dir` does
    /// not exist or is not a directory.
    pub fn with_filesystem(
        fs: F,
        start_dir: impl AsRef<Path>,
        policy: ListingPolicy,
    ) -> Result<Self, ListingError> {
        let start_dir = start_dir.as_ref();
        let cwd = if start_dir.is_absolute() {
            PathBuf::from("/")
        } else {
            fs.current_dir().map_err(|source| ListingError::Io {
                path: PathBuf::from("."),
                source,
            })?
        };
        let current_dir = canonicalize_dir(&fs, start_dir, &cwd)
            .map_err(|e| ListingError::start_directory(start_dir, e))?;

        let excludes = GlobFilter::compile(&policy.exclude_patterns);
        let mut listing = Self {
            fs,
            current_dir,
            entries: Vec::new(),
            policy,
            excludes,
        };
        listing.reload();
        Ok(listing)
    }

    /// Rebuild the entries of the current directory.
    pub fn reload(&mut self) {
        let mut entries = Vec::new();
        if !self.policy.hide_parent {
            entries.push(FileEntry::parent(&self.current_dir, &self.policy.up_text));
        }
        entries.extend(TreeWalker::new(&self.policy, &self.excludes).walk(&self.fs, &self.current_dir));
        sort_entries(&mut entries, &self.policy);

        log::debug!(
            "Listed {} entries in {}",
            entries.len(),
            self.current_dir.display()
        );
        self.entries = entries;
    }

    /// Move to `path` (relative to the current directory) and reload.
    ///
    /// On error the current directory and entries are left untouched.
    pub fn change_directory(&mut self, path: impl AsRef<Path>) -> Result<(), ListingError> {
        let dir = canonicalize_dir(&self.fs, path.as_ref(), &self.current_dir)?;
        self.current_dir = dir;
        self.reload();
        Ok(())
    }

    /// Replace the entries with externally supplied paths, one per line.
    ///
    /// Lines are taken verbatim in input order: no sorting, no existence
    /// check, no parent entry. Relative lines are joined to the current
    /// directory. Empty lines are skipped.
    pub fn load_from_external_source<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter(|line| !line.as_ref().is_empty())
            .map(|line| FileEntry::external(line.as_ref(), &self.current_dir))
            .collect();
        self.entries = entries;
    }

    pub fn set_show_hidden(&mut self, show_hidden: bool) {
        self.policy.show_hidden = show_hidden;
        self.reload();
    }

    /// Flip hidden-file visibility and reload. Returns the new setting.
    pub fn toggle_hidden(&mut self) -> bool {
        self.set_show_hidden(!self.policy.show_hidden);
        self.policy.show_hidden
    }

    /// Replace the whole policy and reload.
    pub fn set_policy(&mut self, policy: ListingPolicy) {
        self.excludes = GlobFilter::compile(&policy.exclude_patterns);
        self.policy = policy;
        self.reload();
    }

    /// Path of `entry` relative to the current directory, or its name when
    /// it lies outside (the parent entry, external entries).
    pub fn relative_name(&self, entry: &FileEntry) -> String {
        if entry.is_parent() {
            return entry.name.clone();
        }
        match entry.path.strip_prefix(&self.current_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().into_owned(),
            _ => entry.name.clone(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn policy(&self) -> &ListingPolicy {
        &self.policy
    }
}
