//! Pre-order depth-first traversal driven by a visitor.
//!
//! The traversal classifies every node it reaches and hands it to a visitor
//! closure, which decides through [`Visit`] whether to descend, skip or stop.
//! All state lives in the traversal itself; nothing is global.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::fs::{FileSystem, NodeType};

/// Visitor verdict for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the node if it is a directory.
    Continue,
    /// Do not descend into the node.
    SkipSubtree,
    /// Do not descend, and skip the node's remaining siblings.
    SkipSiblings,
    /// End the traversal.
    Stop,
}

/// Classification of a node reached by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    /// A directory that could not be opened for reading.
    UnreadableDirectory,
    /// Anything that is not a directory.
    File,
    /// A followed symlink whose target does not exist.
    BrokenLink,
    /// A symlink that was not followed.
    Symlink,
}

/// A node handed to the visitor.
#[derive(Debug)]
pub struct Node<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    /// 1 for direct children of the traversal root.
    pub depth: usize,
    pub kind: NodeKind,
}

enum Flow {
    Continue,
    Stop,
}

struct Classified {
    kind: NodeKind,
    /// Children and resolved identity of a readable directory.
    subtree: Option<(Vec<OsString>, PathBuf)>,
}

struct Traversal<'f, F: ?Sized> {
    fs: &'f F,
    follow_symlinks: bool,
    /// Resolved paths of the directories currently being descended.
    ancestors: Vec<PathBuf>,
}

/// Walk everything below `root` in pre-order, calling `visit` for each node.
///
/// The root itself is never visited. Children are visited in byte-wise name
/// order. Without `follow_symlinks` the walk is physical: symlinks are
/// reported as [`NodeKind::Symlink`] and never descended. With it, a
/// symlinked directory that resolves to one of its own ancestors is reported
/// but not descended.
///
/// I/O errors on single nodes are logged and the node is skipped; the walk
/// itself never fails.
pub fn traverse<F, V>(fs: &F, root: &Path, follow_symlinks: bool, mut visit: V)
where
    F: FileSystem + ?Sized,
    V: FnMut(&Node<'_>) -> Visit,
{
    let children = match fs.read_dir(root) {
        Ok(children) => children,
        Err(err) => {
            log::warn!("Cannot read {}: {}", root.display(), err);
            return;
        }
    };
    let identity = fs
        .canonicalize(root)
        .unwrap_or_else(|_| root.to_path_buf());

    let mut traversal = Traversal {
        fs,
        follow_symlinks,
        ancestors: vec![identity],
    };
    traversal.descend(root, children, 1, &mut visit);
}

impl<F: FileSystem + ?Sized> Traversal<'_, F> {
    fn descend<V>(&mut self, dir: &Path, mut children: Vec<OsString>, depth: usize, visit: &mut V) -> Flow
    where
        V: FnMut(&Node<'_>) -> Visit,
    {
        children.sort();

        for name in children {
            let path = dir.join(&name);
            let Some(classified) = self.classify(&path, &name) else {
                continue;
            };
            let display_name = name.to_string_lossy();
            let node = Node {
                path: &path,
                name: &display_name,
                depth,
                kind: classified.kind,
            };

            match visit(&node) {
                Visit::Continue => {}
                Visit::SkipSubtree => continue,
                Visit::SkipSiblings => return Flow::Continue,
                Visit::Stop => return Flow::Stop,
            }

            let Some((grandchildren, identity)) = classified.subtree else {
                continue;
            };
            if self.ancestors.contains(&identity) {
                log::debug!(
                    "Not descending into {}: symlink cycle back to {}",
                    path.display(),
                    identity.display()
                );
                continue;
            }

            self.ancestors.push(identity);
            let flow = self.descend(&path, grandchildren, depth + 1, visit);
            self.ancestors.pop();
            if let Flow::Stop = flow {
                return Flow::Stop;
            }
        }

        Flow::Continue
    }

    fn classify(&self, path: &Path, name: &OsStr) -> Option<Classified> {
        let node_type = match self.fs.symlink_metadata(path) {
            Ok(t) => t,
            Err(err) => {
                log::warn!("Skipping {}: {}", path.display(), err);
                return None;
            }
        };

        let classified = match node_type {
            NodeType::Directory => {
                let identity = self
                    .ancestors
                    .last()
                    .map(|parent| parent.join(name))
                    .unwrap_or_else(|| path.to_path_buf());
                self.open_dir(path, identity)
            }
            NodeType::Symlink if self.follow_symlinks => match self.fs.metadata(path) {
                Ok(NodeType::Directory) => match self.fs.canonicalize(path) {
                    Ok(identity) => self.open_dir(path, identity),
                    Err(err) => {
                        log::debug!("Cannot resolve {}: {}", path.display(), err);
                        leaf(NodeKind::BrokenLink)
                    }
                },
                Ok(_) => leaf(NodeKind::File),
                Err(err) => {
                    log::debug!("Broken symlink {}: {}", path.display(), err);
                    leaf(NodeKind::BrokenLink)
                }
            },
            NodeType::Symlink => leaf(NodeKind::Symlink),
            NodeType::File | NodeType::Other => leaf(NodeKind::File),
        };
        Some(classified)
    }

    fn open_dir(&self, path: &Path, identity: PathBuf) -> Classified {
        match self.fs.read_dir(path) {
            Ok(children) => Classified {
                kind: NodeKind::Directory,
                subtree: Some((children, identity)),
            },
            Err(err) => {
                log::debug!("Cannot open directory {}: {}", path.display(), err);
                leaf(NodeKind::UnreadableDirectory)
            }
        }
    }
}

fn leaf(kind: NodeKind) -> Classified {
    Classified {
        kind,
        subtree: None,
    }
}
