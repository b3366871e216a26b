//! Ordering of listing entries

use std::cmp::Ordering;

use super::config::ListingPolicy;
use super::entry::FileEntry;

/// One of the four total orders a listing can be sorted by.
///
/// Every order ends with a case-sensitive comparison of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Name,
    TypeThenName,
    DepthThenName,
    DepthThenTypeThenName,
}

impl SortOrder {
    pub fn from_policy(policy: &ListingPolicy) -> Self {
        match (policy.sort_by_depth, policy.sort_by_type) {
            (false, false) => SortOrder::Name,
            (false, true) => SortOrder::TypeThenName,
            (true, false) => SortOrder::DepthThenName,
            (true, true) => SortOrder::DepthThenTypeThenName,
        }
    }

    pub fn compare(self, a: &FileEntry, b: &FileEntry) -> Ordering {
        let by_depth = || a.depth.cmp(&b.depth);
        let by_type = || a.kind.rank().cmp(&b.kind.rank());
        let by_name = || a.name.cmp(&b.name);

        match self {
            SortOrder::Name => by_name(),
            SortOrder::TypeThenName => by_type().then_with(by_name),
            SortOrder::DepthThenName => by_depth().then_with(by_name),
            SortOrder::DepthThenTypeThenName => by_depth().then_with(by_type).then_with(by_name),
        }
    }
}

/// Sort entries in place. Leading parent entries keep their position.
pub fn sort_entries(entries: &mut [FileEntry], policy: &ListingPolicy) {
    let order = SortOrder::from_policy(policy);
    let start = entries.iter().take_while(|e| e.is_parent()).count();
    entries[start..].sort_by(|a, b| order.compare(a, b));
}
