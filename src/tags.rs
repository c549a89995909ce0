//! Tag aggregation across listings of different entity kinds

use std::collections::BTreeSet;

use tracing::trace;

use crate::model::{ListResult, WithTags};

/// Collects the distinct tags of every listing added to it
///
/// The order of [`TagFinder::add`] calls does not affect the result, and
/// memory grows with the number of distinct tags only.
///
/// # Example
///
/// ```rust
/// use connector_kit::model::{Connection, Integration, ListResult};
/// use connector_kit::TagFinder;
///
/// let tags = TagFinder::new()
///     .add(&ListResult::of([Integration::new("i1", "orders").with_tags(["tag1", "tag2"])]))
///     .add(&ListResult::of([Connection::new("c1", "crm").with_tags(["tag2", "tag3"])]))
///     .result();
///
/// assert_eq!(tags.total_count, 3);
/// assert_eq!(tags.items, vec!["tag1", "tag2", "tag3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFinder {
    tags: BTreeSet<String>,
}

impl TagFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tags of every item in a listing
    pub fn add<T: WithTags>(mut self, list: &ListResult<T>) -> Self {
        self.extend_from(list);
        self
    }

    /// In-place variant of [`TagFinder::add`]
    pub fn extend_from<T: WithTags>(&mut self, list: &ListResult<T>) {
        for item in list {
            self.tags.extend(item.tags().iter().cloned());
        }
        trace!(items = list.len(), distinct = self.tags.len(), "collected tags");
    }

    /// Distinct tags, sorted, with `total_count` set to their number
    pub fn result(&self) -> ListResult<String> {
        ListResult::of(self.tags.iter().cloned())
    }
}
