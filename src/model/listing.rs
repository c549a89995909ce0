//! Paginated listings and tagged entities

use std::collections::BTreeSet;

use serde::Serialize;

/// A page of items together with a total count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> ListResult<T> {
    /// Wrap items as a complete listing, `total_count == items.len()`
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let total_count = items.len();
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> IntoIterator for &'a ListResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Entities exposing a set of case-sensitive tags
pub trait WithTags {
    fn tags(&self) -> &BTreeSet<String>;
}

fn collect_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

/// A configured integration flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub tags: BTreeSet<String>,
}

impl Integration {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }
}

impl WithTags for Integration {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A connection, i.e. a connector bound to concrete credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub tags: BTreeSet<String>,
}

impl Connection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }
}

impl WithTags for Connection {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}
