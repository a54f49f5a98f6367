//! Page window arithmetic over a filtered sequence

/// The visible slice of a filtered sequence plus its page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    pub total_pages: usize,
    /// Inclusive, 0-based
    pub start_index: usize,
    /// Exclusive, 0-based
    pub end_index: usize,
}

impl<T> Page<'_, T> {
    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `total_items`; zero items means zero pages
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Compute the page window for a 1-based `current_page`
///
/// The caller keeps `current_page` within `1..=max(1, total_pages)`; a page
/// past the end simply yields an empty slice.
pub fn paginate<T>(filtered: &[T], page_size: usize, current_page: usize) -> Page<'_, T> {
    debug_assert!(page_size > 0, "page size must be positive");

    let total_items = filtered.len();
    let start_index = current_page.saturating_sub(1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(total_items);

    let items = if start_index >= total_items {
        &filtered[..0]
    } else {
        &filtered[start_index..end_index]
    };

    Page {
        items,
        total_items,
        total_pages: total_pages(total_items, page_size),
        start_index,
        end_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(1000, 20), 50);
        assert_eq!(total_pages(1001, 20), 51);
    }

    #[test]
    fn test_total_pages_every_count_up_to_one_page() {
        for items in 1..=20 {
            assert_eq!(total_pages(items, 20), 1, "{} items", items);
        }
    }

    #[test]
    fn test_first_page() {
        let data: Vec<usize> = (0..45).collect();
        let page = paginate(&data, 20, 1);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 20);
        assert_eq!(page.items, &data[0..20]);
        assert_eq!(page.total_items, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let data: Vec<usize> = (0..45).collect();
        let page = paginate(&data, 20, 3);
        assert_eq!(page.start_index, 40);
        assert_eq!(page.end_index, 45);
        assert_eq!(page.items, &[40, 41, 42, 43, 44]);
    }

    #[test]
    fn test_empty_sequence() {
        let data: Vec<usize> = Vec::new();
        let page = paginate(&data, 20, 1);
        assert!(page.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 0);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let data: Vec<usize> = (0..5).collect();
        let page = paginate(&data, 20, 4);
        assert!(page.is_empty());
        assert_eq!(page.start_index, 60);
        assert_eq!(page.end_index, 5);
    }

    #[test]
    fn test_exact_multiple() {
        let data: Vec<usize> = (0..40).collect();
        let page = paginate(&data, 20, 2);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.end_index, 40);
    }
}
