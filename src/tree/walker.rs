//! TreeWalker - collects the filtered, depth-bounded entries below a root

use std::path::Path;

use crate::fs::FileSystem;

use super::config::ListingPolicy;
use super::entry::{EntryKind, FileEntry};
use super::filter::GlobFilter;
use super::traversal::{Node, NodeKind, Visit, traverse};

/// Walks a directory according to a [`ListingPolicy`].
///
/// The result is in traversal order; sorting is a separate step.
pub struct TreeWalker<'a> {
    policy: &'a ListingPolicy,
    excludes: &'a GlobFilter,
}

impl<'a> TreeWalker<'a> {
    pub fn new(policy: &'a ListingPolicy, excludes: &'a GlobFilter) -> Self {
        Self { policy, excludes }
    }

    /// Collect the entries below `root`. The root itself is not included.
    pub fn walk<F: FileSystem + ?Sized>(&self, fs: &F, root: &Path) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        traverse(fs, root, self.policy.follow_symlinks, |node| {
            self.visit(node, &mut entries)
        });
        entries
    }

    fn visit(&self, node: &Node<'_>, entries: &mut Vec<FileEntry>) -> Visit {
        if self.is_pruned(node.name) {
            return Visit::SkipSubtree;
        }

        let kind = entry_kind(node.kind);
        if self.is_emitted(kind) {
            entries.push(FileEntry::new(
                node.path.to_path_buf(),
                node.name,
                kind,
                node.depth as isize,
            ));
        }

        if self.policy.may_descend(node.depth) {
            Visit::Continue
        } else {
            Visit::SkipSubtree
        }
    }

    /// Hidden and excluded nodes are dropped together with their subtree.
    fn is_pruned(&self, name: &str) -> bool {
        (!self.policy.show_hidden && name.starts_with('.')) || self.excludes.matches(name)
    }

    /// Inclusion filters only decide emission, never recursion.
    ///
    /// Inaccessible entries are neither files nor directories and pass both.
    fn is_emitted(&self, kind: EntryKind) -> bool {
        let hidden_as_file = self.policy.only_dirs && kind == EntryKind::RegularFile;
        let hidden_as_dir = self.policy.only_files && kind == EntryKind::Directory;
        !hidden_as_file && !hidden_as_dir
    }
}

fn entry_kind(kind: NodeKind) -> EntryKind {
    match kind {
        NodeKind::Directory => EntryKind::Directory,
        NodeKind::UnreadableDirectory | NodeKind::BrokenLink => EntryKind::Inaccessible,
        NodeKind::File | NodeKind::Symlink => EntryKind::RegularFile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryFileSystem;

    fn walk(fs: &MemoryFileSystem, policy: &ListingPolicy) -> Vec<(String, EntryKind, isize)> {
        let excludes = GlobFilter::compile(&policy.exclude_patterns);
        TreeWalker::new(policy, &excludes)
            .walk(fs, Path::new("/root"))
            .into_iter()
            .map(|e| (e.name, e.kind, e.depth))
            .collect()
    }

    fn names(entries: &[(String, EntryKind, isize)]) -> Vec<&str> {
        entries.iter().map(|(n, _, _)| n.as_str()).collect()
    }

    fn unlimited() -> ListingPolicy {
        ListingPolicy {
            depth_limit: 0,
            ..Default::default()
        }
    }

    fn sample_fs() -> MemoryFileSystem {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/root/a.txt");
        fs.add_file("/root/.hidden");
        fs.add_file("/root/.config/settings");
        fs.add_file("/root/sub/c.txt");
        fs.add_file("/root/sub/deeper/d.txt");
        fs
    }

    #[test]
    fn test_hidden_nodes_pruned() {
        let fs = sample_fs();
        let entries = walk(&fs, &unlimited());
        assert_eq!(names(&entries), vec!["a.txt", "sub", "c.txt", "deeper", "d.txt"]);
    }

    #[test]
    fn test_show_hidden() {
        let fs = sample_fs();
        let policy = ListingPolicy {
            show_hidden: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert!(names(&entries).contains(&".hidden"));
        assert!(names(&entries).contains(&"settings"));
    }

    #[test]
    fn test_depth_limit_bounds_entries() {
        let fs = sample_fs();
        let policy = ListingPolicy {
            depth_limit: 2,
            ..Default::default()
        };
        let entries = walk(&fs, &policy);
        assert!(entries.iter().all(|(_, _, depth)| *depth <= 2));
        // The directory at the limit is listed, its children are not.
        assert!(entries.contains(&("deeper".to_string(), EntryKind::Directory, 2)));
        assert!(!names(&entries).contains(&"d.txt"));
    }

    #[test]
    fn test_default_lists_direct_children_only() {
        let fs = sample_fs();
        let entries = walk(&fs, &ListingPolicy::default());
        assert_eq!(names(&entries), vec!["a.txt", "sub"]);
    }

    #[test]
    fn test_only_files_still_recurses() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/root/sub/c.txt");
        let policy = ListingPolicy {
            only_files: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert_eq!(entries, vec![("c.txt".to_string(), EntryKind::RegularFile, 2)]);
    }

    #[test]
    fn test_only_dirs() {
        let fs = sample_fs();
        let policy = ListingPolicy {
            only_dirs: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert_eq!(names(&entries), vec!["sub", "deeper"]);
    }

    #[test]
    fn test_only_dirs_and_only_files_combine() {
        let fs = sample_fs();
        let policy = ListingPolicy {
            only_dirs: true,
            only_files: true,
            ..unlimited()
        };
        assert!(walk(&fs, &policy).is_empty());
    }

    #[test]
    fn test_only_files_keeps_unreadable_directory() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/root/locked/x.txt");
        fs.add_file("/root/open/y.txt");
        fs.deny_read("/root/locked");
        let policy = ListingPolicy {
            only_files: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert_eq!(
            entries,
            vec![
                ("locked".to_string(), EntryKind::Inaccessible, 1),
                ("y.txt".to_string(), EntryKind::RegularFile, 2),
            ]
        );
    }

    #[test]
    fn test_only_dirs_keeps_followed_broken_link() {
        let mut fs = sample_fs();
        fs.add_symlink("/root/dangling", "nowhere");
        let policy = ListingPolicy {
            only_dirs: true,
            follow_symlinks: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert_eq!(names(&entries), vec!["dangling", "sub", "deeper"]);
        assert!(entries.contains(&("dangling".to_string(), EntryKind::Inaccessible, 1)));
    }

    #[test]
    fn test_exclude_prunes_subtree() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/root/foo.tmp/inner.txt");
        fs.add_file("/root/foo.tmp.bak");
        fs.add_file("/root/keep.txt");
        let policy = ListingPolicy {
            exclude_patterns: vec!["*.tmp".to_string()],
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert_eq!(names(&entries), vec!["foo.tmp.bak", "keep.txt"]);
    }

    #[test]
    fn test_inaccessible_directory_recorded() {
        let mut fs = sample_fs();
        fs.deny_read("/root/sub");
        let entries = walk(&fs, &unlimited());
        assert!(entries.contains(&("sub".to_string(), EntryKind::Inaccessible, 1)));
        assert!(!names(&entries).contains(&"c.txt"));
    }

    #[test]
    fn test_symlinks_without_follow_are_leaves() {
        let mut fs = sample_fs();
        fs.add_symlink("/root/link", "sub");
        let entries = walk(&fs, &unlimited());
        assert!(entries.contains(&("link".to_string(), EntryKind::RegularFile, 1)));
        assert_eq!(names(&entries).iter().filter(|n| **n == "c.txt").count(), 1);
    }

    #[test]
    fn test_followed_broken_link_is_inaccessible() {
        let mut fs = sample_fs();
        fs.add_symlink("/root/dangling", "nowhere");
        let policy = ListingPolicy {
            follow_symlinks: true,
            ..unlimited()
        };
        let entries = walk(&fs, &policy);
        assert!(entries.contains(&("dangling".to_string(), EntryKind::Inaccessible, 1)));
    }

    #[test]
    fn test_entry_paths_are_absolute() {
        let fs = sample_fs();
        let excludes = GlobFilter::default();
        let policy = unlimited();
        let entries = TreeWalker::new(&policy, &excludes).walk(&fs, Path::new("/root"));
        let c = entries.iter().find(|e| e.name == "c.txt").unwrap();
        assert_eq!(c.path, Path::new("/root/sub/c.txt"));
    }
}
