//! Directory tree walking logic
//!
//! This module turns a directory into a flat, ordered list of entries:
//!
//! - `traversal`: generic pre-order walk driven by a visitor returning [`Visit`]
//! - `TreeWalker`: the visitor applying hidden/exclude/inclusion/depth rules
//! - `sort_entries`: one of four total orders over the collected entries

mod config;
mod entry;
mod filter;
mod sort;
mod traversal;
mod walker;

// Re-export public types
pub use config::{DEFAULT_UP_TEXT, ListingPolicy};
pub use entry::{EntryKind, FileEntry, PARENT_DEPTH};
pub use filter::GlobFilter;
pub use sort::{SortOrder, sort_entries};
pub use traversal::{Node, NodeKind, Visit, traverse};
pub use walker::TreeWalker;
