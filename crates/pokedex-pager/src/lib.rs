//! Paginated filter view for in-memory catalog lists
//!
//! This crate provides the list logic behind the Pokédex explorer:
//! - Case-insensitive substring filtering over entry names
//! - Page window arithmetic over the filtered sequence
//! - An abbreviated page-token sequence for compact navigation controls
//! - A small state holder that keeps the search term and current page valid
//!
//! # Example
//!
//! ```rust
//! use pokedex_pager::{Entry, PageToken, PagedFilterView};
//!
//! let entries: Vec<Entry> = (1..=45)
//!     .map(|i| Entry::new(format!("mon-{i}"), format!("https://example.test/{i}/")))
//!     .collect();
//!
//! let mut view = PagedFilterView::new(entries, 20);
//! assert_eq!(view.total_pages(), 3);
//!
//! assert!(view.set_current_page(3));
//! assert_eq!(view.page().items.len(), 5);
//!
//! view.set_search_term("mon-1");
//! assert_eq!(view.current_page(), 1);
//! assert_eq!(view.page_tokens(), vec![PageToken::Page(1)]);
//! ```

mod entry;
mod filter;
mod paginate;
mod tokens;
mod view;

pub use entry::{Entry, Named};
pub use filter::filter_entries;
pub use paginate::{Page, paginate, total_pages};
pub use tokens::{DEFAULT_MAX_VISIBLE_PAGES, PageToken, summarize_pages};
pub use view::{DEFAULT_PAGE_SIZE, JUMP_INPUT_MIN_PAGES, PageView, PagedFilterView};
