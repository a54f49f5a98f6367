//! Abbreviated page-number sequence for navigation controls

use std::fmt;

/// How many page numbers the navigation shows before it starts abbreviating
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// One slot in the navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable page number (1-based)
    Page(usize),
    /// A non-clickable gap placeholder
    Ellipsis,
}

impl PageToken {
    /// The page number, `None` for an ellipsis
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => write!(f, "..."),
        }
    }
}

/// Summarize `total_pages` into at most a handful of tokens around `current_page`
///
/// Page 1 and the last page are always present. Around the current page a
/// window of neighbours is shown, pinned to pages 2..=4 near the start and to
/// the last four pages near the end. Gaps are marked with [`PageToken::Ellipsis`].
///
/// `current_page` is not clamped; callers validate it before asking.
///
/// # Example
///
/// ```rust
/// use pokedex_pager::{PageToken::{Ellipsis, Page}, summarize_pages};
///
/// assert_eq!(
///     summarize_pages(10, 5, 5),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn summarize_pages(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<PageToken> {
    if total_pages <= max_visible.max(1) {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let last = total_pages;
    let mut tokens = vec![PageToken::Page(1)];

    let mut window_start = current_page.saturating_sub(1).max(2);
    let mut window_end = (current_page + 1).min(last - 1);

    if current_page <= 3 {
        window_end = 4;
    }
    if current_page >= last.saturating_sub(2) {
        window_start = last.saturating_sub(3);
    }

    // Only reachable with a max_visible below 5, where the pinned window
    // would otherwise overlap the first or last page.
    window_start = window_start.max(2);
    window_end = window_end.min(last - 1);

    if window_start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.extend((window_start..=window_end).map(PageToken::Page));

    if window_end < last - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(last));

    tokens
}

#[cfg(test)]
mod tests {
    use super::PageToken::{Ellipsis, Page};
    use super::*;

    fn summarize(total: usize, current: usize) -> Vec<PageToken> {
        summarize_pages(total, current, DEFAULT_MAX_VISIBLE_PAGES)
    }

    #[test]
    fn test_no_pages() {
        assert!(summarize(0, 1).is_empty());
    }

    #[test]
    fn test_single_page() {
        assert_eq!(summarize(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_few_pages_show_everything() {
        for total in 1..=5 {
            for current in 1..=total {
                let expected: Vec<PageToken> = (1..=total).map(Page).collect();
                assert_eq!(summarize(total, current), expected);
            }
        }
    }

    #[test]
    fn test_start_of_range() {
        assert_eq!(
            summarize(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(summarize(10, 2), summarize(10, 1));
        assert_eq!(summarize(10, 3), summarize(10, 1));
    }

    #[test]
    fn test_end_of_range() {
        assert_eq!(
            summarize(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            summarize(10, 8),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_middle_has_both_ellipses() {
        assert_eq!(
            summarize(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_past_page_two_gets_leading_ellipsis() {
        // current 4: window 3..=5, 3 > 2 so the gap after page 1 is marked
        assert_eq!(
            summarize(10, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_six_pages() {
        assert_eq!(
            summarize(6, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        assert_eq!(
            summarize(6, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn test_first_and_last_always_present() {
        for total in 6..=30 {
            for current in 1..=total {
                let tokens = summarize(total, current);
                assert_eq!(tokens.first(), Some(&Page(1)));
                assert_eq!(tokens.last(), Some(&Page(total)));
                assert!(tokens.contains(&Page(current)), "{}/{}", current, total);
                assert!(tokens.len() <= 7);
            }
        }
    }

    #[test]
    fn test_pages_strictly_increase() {
        for total in 6..=30 {
            for current in 1..=total {
                let pages: Vec<usize> = summarize(total, current)
                    .iter()
                    .filter_map(PageToken::page)
                    .collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{:?}", pages);
            }
        }
    }

    #[test]
    fn test_small_max_visible_never_repeats_pages() {
        let tokens = summarize_pages(4, 1, 3);
        assert_eq!(tokens, vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "...");
    }
}
