use pokedex_pager::PageToken;

use crate::state::CatalogState;

/// View model for the pagination bar below the grid
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationViewModel {
    /// "Showing 1-20 of 1302 Pokémon"
    pub summary: String,
    pub buttons: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    /// Hint or live input for the jump-to-page field, if it is offered
    pub jump: Option<JumpField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    pub is_current: bool,
    pub is_ellipsis: bool,
    /// Digit key that picks this button; ellipses have none
    pub hotkey: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpField {
    Hint(String),
    Editing(String),
}

impl PaginationViewModel {
    /// `None` when there is only one page (or none at all)
    pub fn from_state(catalog: &CatalogState) -> Option<Self> {
        let view = &catalog.view;
        if !view.shows_navigation() {
            return None;
        }

        let page = view.page();
        let current = view.current_page();
        let total_pages = view.total_pages();

        let summary = format!(
            "Showing {}-{} of {} Pokémon",
            page.start_index + 1,
            page.end_index,
            page.total_items
        );

        let mut hotkeys = 1..=9;
        let buttons = view
            .page_tokens()
            .into_iter()
            .map(|token| PageButton {
                label: token.to_string(),
                is_current: token == PageToken::Page(current),
                is_ellipsis: token == PageToken::Ellipsis,
                hotkey: token.page().and_then(|_| hotkeys.next()),
            })
            .collect();

        let jump = if view.shows_jump_input() {
            Some(match &catalog.jump_input {
                Some(input) => JumpField::Editing(input.clone()),
                None => JumpField::Hint(format!("Go to page (1-{}): press :", total_pages)),
            })
        } else {
            None
        };

        Some(Self {
            summary,
            buttons,
            previous_enabled: current > 1,
            next_enabled: current < total_pages,
            jump,
        })
    }
}
