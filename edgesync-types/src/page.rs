//! Paging primitives for full-scan lookups.
//!
//! Resource collision checks walk the complete set of same-typed
//! resources for a tenant, page by page, because no indexed lookup by
//! key is assumed available.

use serde::{Deserialize, Serialize};

/// A request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Zero-based page index.
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
}

impl PageLink {
    /// Creates a link to the first page.
    #[must_use]
    pub fn first(page_size: usize) -> Self {
        Self { page: 0, page_size }
    }

    /// Returns a link to the page after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
        }
    }

    /// Offset of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

/// One page of results plus a continuation flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in the store's pinned iteration order.
    pub items: Vec<T>,
    /// Whether another page follows.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Creates an empty terminal page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
        }
    }

    /// Creates a page from items and a continuation flag.
    #[must_use]
    pub fn new(items: Vec<T>, has_next: bool) -> Self {
        Self { items, has_next }
    }
}
