//! Pagination
//!
//! Generic page-based paginator, decoupled from any storage engine.
//! Listings hand it the full filtered collection and a requested page.

/// Number of records shown per listing page
pub const LIST_PAGE_SIZE: usize = 5;

/// A single page of an ordered collection, plus pagination metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    number: usize,
    num_pages: usize,
    total_items: usize,
    page_size: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 1-based page number actually served (after clamping)
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Size of the whole collection that was paginated
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// True iff the collection spans more than one page
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.total_items > self.page_size
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Splits collections into fixed-size pages
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Create a paginator; a zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Serve one page of `items`.
    ///
    /// Out-of-range requests are clamped to the nearest valid page: page 0
    /// becomes page 1, anything past the end becomes the last page. An empty
    /// collection yields page 1 with no items.
    #[must_use]
    pub fn paginate<T>(&self, items: Vec<T>, requested_page: usize) -> Page<T> {
        let total_items = items.len();
        let num_pages = total_items.div_ceil(self.page_size).max(1);
        let number = requested_page.clamp(1, num_pages);

        let items = items
            .into_iter()
            .skip((number - 1) * self.page_size)
            .take(self.page_size)
            .collect();

        Page {
            items,
            number,
            num_pages,
            total_items,
            page_size: self.page_size,
        }
    }
}
