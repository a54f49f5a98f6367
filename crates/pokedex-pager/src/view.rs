//! Search term and current page state over an owned entry list

use crate::{
    entry::Named,
    filter::filter_entries,
    paginate::{paginate, total_pages},
    tokens::{DEFAULT_MAX_VISIBLE_PAGES, PageToken, summarize_pages},
};

/// Entries shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The jump-to-page input is only offered above this many pages
pub const JUMP_INPUT_MIN_PAGES: usize = 10;

/// Owns the full entry list plus the only two pieces of mutable list state:
/// the search term and the current page.
///
/// Everything else (filtered entries, page window, navigation tokens) is
/// derived on read. The current page always satisfies
/// `1 <= current_page <= max(1, total_pages)`.
#[derive(Debug, Clone)]
pub struct PagedFilterView<E> {
    entries: Vec<E>,
    search_term: String,
    current_page: usize,
    page_size: usize,
}

impl<E> Default for PagedFilterView<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<E: Named> PagedFilterView<E> {
    /// Create a view over `entries`; a zero page size falls back to the default
    pub fn new(entries: Vec<E>, page_size: usize) -> Self {
        Self {
            entries,
            search_term: String::new(),
            current_page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the entry list, keeping the search term
    pub fn set_entries(&mut self, entries: Vec<E>) {
        self.entries = entries;
        self.clamp_current_page();
    }

    /// Update the search term; always goes back to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Append a character to the search term
    pub fn push_search_char(&mut self, ch: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(ch);
        self.set_search_term(term);
    }

    /// Remove the last character of the search term, if any
    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_search_term(term);
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Request page `page`; out of range requests are ignored
    ///
    /// Returns `true` if the current page was changed or re-selected.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_current_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_current_page(self.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.set_current_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.set_current_page(self.total_pages())
    }

    /// Handle raw jump-to-page input
    ///
    /// The leading integer of the input is used (`"4.5"` is 4, `"12abc"` is
    /// 12); input without leading digits is ignored. Numbers are clamped into
    /// `1..=total_pages` before being requested, so `0` goes to the first
    /// page and anything too large goes to the last one.
    pub fn jump_to_page(&mut self, input: &str) -> bool {
        let Some(requested) = parse_leading_int(input) else {
            return false;
        };

        let total = self.total_pages();
        if total == 0 {
            return false;
        }

        let page = requested.clamp(1, total as i64) as usize;
        self.set_current_page(page)
    }

    /// Entries matching the current search term, in original order
    pub fn filtered(&self) -> Vec<&E> {
        filter_entries(&self.entries, &self.search_term)
    }

    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items(), self.page_size)
    }

    /// Visible entries of the current page, plus window metadata
    pub fn page(&self) -> PageView<'_, E> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page_size, self.current_page);

        PageView {
            items: page.items.to_vec(),
            current_page: self.current_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            start_index: page.start_index,
            end_index: page.end_index,
        }
    }

    /// Navigation tokens for the current page
    pub fn page_tokens(&self) -> Vec<PageToken> {
        summarize_pages(
            self.total_pages(),
            self.current_page,
            DEFAULT_MAX_VISIBLE_PAGES,
        )
    }

    /// Navigation controls are pointless for a single page
    pub fn shows_navigation(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn shows_jump_input(&self) -> bool {
        self.total_pages() > JUMP_INPUT_MIN_PAGES
    }

    fn clamp_current_page(&mut self) {
        let max_page = self.total_pages().max(1);
        self.current_page = self.current_page.clamp(1, max_page);
    }
}

/// The current page as seen through a [`PagedFilterView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, E> {
    pub items: Vec<&'a E>,
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Leading optional sign and digits of `input`, after leading whitespace
///
/// Digit runs too long for `i64` saturate instead of failing.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
