//! Pagination bookkeeping for the list views.
//!
//! Pages are 1-indexed like the backend's `page` parameter. The total comes
//! from the server; the pager never guesses it.

use serde::{Deserialize, Serialize};

/// Numbered page buttons shown at most.
pub const MAX_PAGE_BUTTONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Pager {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// False exactly when `page * limit >= total`.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.limit) < self.total
    }

    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        if self.has_next() {
            Self {
                page: self.page + 1,
                ..self
            }
        } else {
            self
        }
    }

    pub fn goto(self, page: u32) -> Self {
        Self {
            page: page.clamp(1, self.page_count()),
            ..self
        }
    }

    pub fn first(self) -> Self {
        Self { page: 1, ..self }
    }

    pub fn with_total(self, total: u64) -> Self {
        Self { total, ..self }
    }

    /// Number of pages, never less than one.
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// Page numbers for the numbered buttons: the first `MAX_PAGE_BUTTONS`.
    pub fn page_buttons(&self) -> Vec<u32> {
        (1..=self.page_count().min(MAX_PAGE_BUTTONS)).collect()
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Tracks which request a list view is waiting for, so a slow reply for a
/// page the admin already left is dropped instead of undoing the selection.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest<K> {
    current: Option<K>,
}

impl<K: PartialEq> LatestRequest<K> {
    pub fn begin(&mut self, key: K) {
        self.current = Some(key);
    }

    pub fn is_current(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }
}
