//! List response envelopes.
//!
//! List endpoints answer in one of two shapes: a paginated envelope
//! (`{count, results}`) or a bare array. The two are decoded explicitly as
//! a tagged variant instead of shape-sniffing at each call site; `page` and
//! `page_size` are not echoed by the server and travel with the request.

use serde::Deserialize;

/// One server-side page of results.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Total matching records across all pages.
    pub count: u64,
    /// Records on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages for a given page size (`ceil(count / page_size)`).
    ///
    /// A zero `page_size` yields zero pages rather than dividing by zero.
    #[must_use]
    pub const fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let count = self.count;
        let size = page_size as u64;
        ((count + size - 1) / size) as u32
    }
}

/// A list response in either of the shapes the fleet API produces.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Paginated envelope with a total count.
    Paginated(Page<T>),
    /// Bare array; no pagination metadata available.
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// The records, regardless of envelope shape.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.results,
            Self::Plain(items) => items,
        }
    }

    /// Number of records carried in this payload (not the total count).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Paginated(page) => page.results.len(),
            Self::Plain(items) => items.len(),
        }
    }

    /// Whether this payload carries no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
