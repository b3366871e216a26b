//! fbrowse - Bounded-depth, filter-aware directory listings for file browsers

pub mod error;
pub mod fs;
pub mod listing;
pub mod output;
pub mod path_utils;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ListingError;
pub use fs::{FileSystem, NodeType, OsFileSystem};
pub use listing::FileListing;
pub use output::{ListFormatter, OutputConfig, StatusFormat, print_json};
pub use tree::{EntryKind, FileEntry, GlobFilter, ListingPolicy, TreeWalker};
