use serde::Serialize;

/// One page of an ordered result set. Page numbers are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: usize, per_page: usize, total_items: usize) -> Self {
        Self {
            items,
            number,
            per_page,
            total_items,
            total_pages: page_count(total_items, per_page),
        }
    }

    /// An out-of-range or unresolved page: no items, totals preserved.
    pub fn empty(number: usize, per_page: usize, total_items: usize) -> Self {
        Self::new(Vec::new(), number, per_page, total_items)
    }
}

/// Number of pages needed to hold `total_items`, zero when empty.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page)
}

/// Item offset of the given 1-based page.
pub fn offset(number: usize, per_page: usize) -> usize {
    (number - 1) * per_page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(39, 4), 10);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 8), 16);
    }

    #[test]
    fn test_page_metadata() {
        let middle = Page::new(vec![0u8; 10], 2, 10, 25);
        assert_eq!(middle.number, 2);
        assert_eq!(middle.total_pages, 3);

        let empty: Page<u8> = Page::empty(1, 10, 0);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 0);
    }
}
