//! Pagination types for the product listing endpoint.

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    /// Case-insensitive substring filter on product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size (default: 20, max: 100)
    #[serde(default)]
    pub size: Option<i64>,
}

impl PageQuery {
    /// Get the page number, minimum 0
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    /// Get the page size, clamped to valid range
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.page() * self.size()
    }

    pub fn name_filter(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Page envelope for list endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in this page
    pub content: Vec<T>,
    /// Total number of items across all pages
    pub total_elements: i64,
    pub total_pages: i64,
    /// Page size (as requested)
    pub size: i64,
    /// Zero-based page number (as requested)
    pub number: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Create a page envelope. `size` must be >= 1 (enforced by [`PageQuery::size`]).
    pub fn new(content: Vec<T>, total_elements: i64, size: i64, number: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            content,
            total_elements,
            total_pages,
            size,
            number,
            first: number == 0,
            last: number + 1 >= total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults() {
        let q = PageQuery::default();
        assert_eq!(q.page(), 0);
        assert_eq!(q.size(), 20);
        assert_eq!(q.offset(), 0);
        assert_eq!(q.name_filter(), "");
    }

    #[test]
    fn test_page_query_clamps_size() {
        let q = PageQuery {
            name: None,
            page: Some(-3),
            size: Some(1000),
        };
        assert_eq!(q.page(), 0);
        assert_eq!(q.size(), 100);
    }

    #[test]
    fn test_page_math() {
        let page = Page::new(vec![1, 2, 3], 25, 20, 0);
        assert_eq!(page.total_pages, 2);
        assert!(page.first);
        assert!(!page.last);

        let page = Page::new(vec![1], 25, 20, 1);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn test_empty_page_is_first_and_last() {
        let page: Page<i64> = Page::new(vec![], 0, 20, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }
}
