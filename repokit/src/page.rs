//! Pagination value objects and page-count arithmetic
//!
//! A paginated listing is requested with a 0-based page index and a page
//! size, and answered with a [`PaginatedResult`] carrying the 1-based page
//! number, the total page count, and the page's items.
//!
//! # Example
//!
//! ```rust
//! use repokit::page::{total_pages, PaginatedResult};
//!
//! assert_eq!(total_pages(10, 3), 4);
//!
//! let page = PaginatedResult::new(1, 4, vec!["a", "b", "c"]);
//! assert_eq!(page.page_number, 1);
//! assert_eq!(page.total_pages, 4);
//! assert_eq!(page.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// One page of entities with page metadata
///
/// `page_number` is 1-based: a request for page index 0 comes back as page
/// number 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResult<E> {
    /// Page number of this result (1-based)
    pub page_number: u64,
    /// Total number of pages at the counted row total
    pub total_pages: u64,
    /// The page's items, in storage order
    pub items: Vec<E>,
}

impl<E> PaginatedResult<E> {
    /// Create a paginated result
    #[must_use]
    pub fn new(page_number: u64, total_pages: u64, items: Vec<E>) -> Self {
        Self {
            page_number,
            total_pages,
            items,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page follows this one
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::page::PaginatedResult;
    ///
    /// let page = PaginatedResult::new(2, 4, vec![1, 2, 3]);
    /// assert!(page.has_next());
    /// let last = PaginatedResult::new(4, 4, vec![4]);
    /// assert!(!last.has_next());
    /// ```
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Consume the result, keeping only the items
    #[must_use]
    pub fn into_items(self) -> Vec<E> {
        self.items
    }
}

/// Total number of pages needed for `total_elements` rows at `amount` rows
/// per page
///
/// Ceiling division for non-negative integers: the quotient, incremented
/// when a remainder exists. `amount` must be non-zero; callers validate
/// before computing.
///
/// # Example
///
/// ```rust
/// use repokit::page::total_pages;
///
/// assert_eq!(total_pages(9, 3), 3);
/// assert_eq!(total_pages(10, 3), 4);
/// assert_eq!(total_pages(0, 5), 0);
/// ```
#[must_use]
pub fn total_pages(total_elements: u64, amount: u64) -> u64 {
    let mut pages = total_elements / amount;
    if total_elements % amount != 0 {
        pages += 1;
    }
    pages
}
