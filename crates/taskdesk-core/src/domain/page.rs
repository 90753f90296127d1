use serde::{Deserialize, Serialize};

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 10;
    pub const MAX_SIZE: u64 = 100;
    /// Keeps `offset` within a signed 64-bit SQL `OFFSET`.
    pub const MAX_PAGE: u64 = i64::MAX as u64 / Self::MAX_SIZE;

    /// Clamp to `1..=MAX_PAGE` and `1..=MAX_SIZE`.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: page.clamp(1, Self::MAX_PAGE),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Zero-based row offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }
}

/// One page of results plus the total across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.size.max(1))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps_to_first_page() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.size, 1);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_page_request_clamps_huge_values() {
        let req = PageRequest::new(u64::MAX, u64::MAX);
        assert_eq!(req.page, PageRequest::MAX_PAGE);
        assert_eq!(req.size, PageRequest::MAX_SIZE);
        assert!(req.offset() <= i64::MAX as u64);
    }

    #[test]
    fn test_offset_of_later_page() {
        assert_eq!(PageRequest::new(3, 20).offset(), 40);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Page<i32> = Page {
            items: vec![],
            page: 1,
            size: 10,
            total_items: 21,
        };
        assert_eq!(page.total_pages(), 3);
    }
}
