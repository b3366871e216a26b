//! Test utilities: an in-memory filesystem and temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

use crate::fs::{FileSystem, NodeType};

/// Symlink hops allowed while resolving one path, matching the usual ELOOP limit.
const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum MemNode {
    Dir { readable: bool },
    File,
    Symlink(PathBuf),
}

/// In-memory [`FileSystem`] for deterministic traversal tests.
///
/// Paths are absolute. Parent directories are created on demand, symlink
/// targets may be relative to the link's directory, and directories can be
/// marked unreadable to simulate permission errors. Nodes can also be made
/// to vanish between listing and stat, as when another process deletes them.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, MemNode>,
    vanished: BTreeSet<PathBuf>,
    current_dir: PathBuf,
}

impl MemoryFileSystem {
    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), MemNode::Dir { readable: true });
        Self {
            nodes,
            vanished: BTreeSet::new(),
            current_dir: PathBuf::from("/"),
        }
    }

    /// Set the directory relative start paths are resolved against.
    pub fn set_current_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.current_dir = path.as_ref().to_path_buf();
        self
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.ensure_parents(path);
        self.nodes
            .entry(path.to_path_buf())
            .or_insert(MemNode::Dir { readable: true });
        self
    }

    /// Add a regular file (and any missing parents).
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.ensure_parents(path);
        self.nodes.insert(path.to_path_buf(), MemNode::File);
        self
    }

    /// Add a symlink pointing at `target`.
    pub fn add_symlink(&mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.ensure_parents(path);
        self.nodes.insert(
            path.to_path_buf(),
            MemNode::Symlink(target.as_ref().to_path_buf()),
        );
        self
    }

    /// Make a directory fail to open with `PermissionDenied`.
    pub fn deny_read(&mut self, path: impl AsRef<Path>) -> &mut Self {
        if let Some(MemNode::Dir { readable }) = self.nodes.get_mut(path.as_ref()) {
            *readable = false;
        }
        self
    }

    /// Keep `path` in its directory listing but make every stat of it fail
    /// with `NotFound`.
    pub fn fail_stat(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.vanished.insert(path.as_ref().to_path_buf());
        self
    }

    fn ensure_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(MemNode::Dir { readable: true });
        }
    }

    fn node(&self, path: &Path) -> io::Result<&MemNode> {
        self.nodes.get(path).ok_or_else(|| not_found(path))
    }

    fn resolve(&self, path: &Path, follow_last: bool, hops: &mut usize) -> io::Result<PathBuf> {
        if !path.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("relative path: {}", path.display()),
            ));
        }

        let components: Vec<Component<'_>> = path.components().collect();
        let mut resolved = PathBuf::from("/");

        for (i, component) in components.iter().enumerate() {
            match component {
                Component::RootDir | Component::Prefix(_) => resolved = PathBuf::from("/"),
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    if !matches!(self.node(&resolved)?, MemNode::Dir { .. }) {
                        return Err(io::Error::new(
                            io::ErrorKind::NotADirectory,
                            format!("not a directory: {}", resolved.display()),
                        ));
                    }
                    resolved.push(name);
                    let is_last = i + 1 == components.len();
                    if let MemNode::Symlink(target) = self.node(&resolved)? {
                        if follow_last || !is_last {
                            *hops += 1;
                            if *hops > MAX_LINK_HOPS {
                                return Err(io::Error::other(format!(
                                    "too many levels of symbolic links: {}",
                                    path.display()
                                )));
                            }
                            let base = resolved
                                .parent()
                                .map(Path::to_path_buf)
                                .unwrap_or_else(|| PathBuf::from("/"));
                            let joined = base.join(target);
                            resolved = self.resolve(&joined, true, hops)?;
                        }
                    }
                }
            }
        }

        Ok(resolved)
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

fn node_type(node: &MemNode) -> NodeType {
    match node {
        MemNode::Dir { .. } => NodeType::Directory,
        MemNode::File => NodeType::File,
        MemNode::Symlink(_) => NodeType::Symlink,
    }
}

impl FileSystem for MemoryFileSystem {
    fn symlink_metadata(&self, path: &Path) -> io::Result<NodeType> {
        if self.vanished.contains(path) {
            return Err(not_found(path));
        }
        let resolved = self.resolve(path, false, &mut 0)?;
        self.node(&resolved).map(node_type)
    }

    fn metadata(&self, path: &Path) -> io::Result<NodeType> {
        if self.vanished.contains(path) {
            return Err(not_found(path));
        }
        let resolved = self.resolve(path, true, &mut 0)?;
        self.node(&resolved).map(node_type)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let resolved = self.resolve(path, true, &mut 0)?;
        match self.node(&resolved)? {
            MemNode::Dir { readable: true } => Ok(self
                .nodes
                .keys()
                .filter(|p| p.parent() == Some(resolved.as_path()))
                .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
                .collect()),
            MemNode::Dir { readable: false } => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", resolved.display()),
            )),
            _ => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", resolved.display()),
            )),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.resolve(path, true, &mut 0)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

/// A temporary directory tree on the real filesystem.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The temporary directory with symlinks resolved (e.g. `/var` -> `/private/var`).
    pub fn canonical_path(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir")
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, path).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parent directories as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `path` pointing at `target` (used verbatim).
    #[cfg(unix)]
    pub fn add_symlink(&self, path: &str, target: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
