use crate::state::CatalogState;

pub const SEARCH_PLACEHOLDER: &str = "Search for a Pokémon...";

/// View model for the search bar and its result line
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarViewModel {
    /// The term, or the placeholder when empty
    pub text: String,
    pub is_placeholder: bool,
    pub is_focused: bool,
    /// Only present while a term is set
    pub results_message: Option<String>,
}

impl SearchBarViewModel {
    pub fn from_state(catalog: &CatalogState) -> Self {
        let term = catalog.view.search_term();

        let results_message = if term.is_empty() {
            None
        } else {
            let count = catalog.view.total_items();
            Some(if count > 0 {
                format!("Found {} Pokémon matching \"{}\"", count, term)
            } else {
                format!("No Pokémon found matching \"{}\"", term)
            })
        };

        Self {
            text: if term.is_empty() {
                SEARCH_PLACEHOLDER.to_string()
            } else {
                term.to_string()
            },
            is_placeholder: term.is_empty(),
            is_focused: catalog.search_focused,
            results_message,
        }
    }
}
