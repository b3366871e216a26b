//! Configuration types for listings

/// Label of the parent entry unless configured otherwise.
pub const DEFAULT_UP_TEXT: &str = "..";

/// Policy controlling what a listing contains and how it is ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPolicy {
    pub show_hidden: bool,
    /// Only emit directories. Traversal is unaffected.
    pub only_dirs: bool,
    /// Only emit non-directories. Directories are still descended into.
    pub only_files: bool,
    pub hide_parent: bool,
    pub follow_symlinks: bool,
    /// Directories first, inaccessible entries last.
    pub sort_by_type: bool,
    /// Shallower entries first.
    pub sort_by_depth: bool,
    /// Deepest level listed, 1 = direct children only. 0 = unlimited.
    pub depth_limit: usize,
    /// Glob patterns matched against basenames; matches are pruned with their subtree.
    pub exclude_patterns: Vec<String>,
    /// Display name of the parent entry.
    pub up_text: String,
}

impl ListingPolicy {
    /// Whether nodes at `depth` may still be descended into.
    pub fn may_descend(&self, depth: usize) -> bool {
        self.depth_limit == 0 || depth < self.depth_limit
    }
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            show_hidden: false,
            only_dirs: false,
            only_files: false,
            hide_parent: false,
            follow_symlinks: false,
            sort_by_type: true,
            sort_by_depth: false,
            depth_limit: 1,
            exclude_patterns: Vec::new(),
            up_text: DEFAULT_UP_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_may_descend() {
        let mut policy = ListingPolicy::default();
        assert!(!policy.may_descend(1));

        policy.depth_limit = 3;
        assert!(policy.may_descend(2));
        assert!(!policy.may_descend(3));

        policy.depth_limit = 0;
        assert!(policy.may_descend(1000));
    }
}
