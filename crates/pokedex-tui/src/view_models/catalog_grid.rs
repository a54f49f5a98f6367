use pokeapi_client::{NamedResource, capitalize, format_dex_number};
use pokedex_pager::Entry;

use crate::state::{CardState, CatalogState, LoadingState};

/// Names offered when a search comes back empty
pub const SEARCH_SUGGESTIONS: [&str; 4] = ["Pikachu", "Charizard", "Blastoise", "Venusaur"];

/// View model for the card grid - all presentation data pre-computed
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogGridViewModel {
    /// Cards of the visible page in display order
    pub cards: Vec<CardViewModel>,
    /// Shown instead of the grid when there is nothing to list
    pub empty_state: Option<EmptyStateViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    /// "#025", or empty when the id is not known yet
    pub dex_number: String,
    pub name: String,
    pub types: Vec<String>,
    /// "0.4m · 6.0kg"
    pub measurements: String,
    pub status: CardStatus,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardStatus {
    Loading,
    Ready,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStateViewModel {
    pub title: String,
    pub message: String,
    pub suggestions: Vec<&'static str>,
}

impl CatalogGridViewModel {
    pub fn from_state(catalog: &CatalogState) -> Self {
        let page = catalog.view.page();

        let cards: Vec<CardViewModel> = page
            .items
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                card_view_model(entry, catalog.cards.get(&entry.name), index == catalog.selected_card)
            })
            .collect();

        let empty_state = if cards.is_empty() {
            Some(empty_state(catalog))
        } else {
            None
        };

        Self { cards, empty_state }
    }
}

fn card_view_model(entry: &Entry, card: Option<&CardState>, is_selected: bool) -> CardViewModel {
    let locator_number = || {
        NamedResource {
            name: entry.name.clone(),
            url: entry.locator.clone(),
        }
        .id()
        .map(format_dex_number)
        .unwrap_or_default()
    };

    match card {
        Some(CardState::Loaded(pokemon)) => CardViewModel {
            dex_number: pokemon.display_id(),
            name: capitalize(&pokemon.name),
            types: pokemon.type_names().into_iter().map(String::from).collect(),
            measurements: format!("{} · {}", pokemon.height_label(), pokemon.weight_label()),
            status: CardStatus::Ready,
            is_selected,
        },
        Some(CardState::Failed(_)) => CardViewModel {
            dex_number: locator_number(),
            name: capitalize(&entry.name),
            types: Vec::new(),
            measurements: "details unavailable".to_string(),
            status: CardStatus::Unavailable,
            is_selected,
        },
        Some(CardState::Loading) | None => CardViewModel {
            dex_number: locator_number(),
            name: capitalize(&entry.name),
            types: Vec::new(),
            measurements: String::new(),
            status: CardStatus::Loading,
            is_selected,
        },
    }
}

fn empty_state(catalog: &CatalogState) -> EmptyStateViewModel {
    let term = catalog.view.search_term();

    match &catalog.loading_state {
        LoadingState::Idle | LoadingState::Loading => EmptyStateViewModel {
            title: "Loading Pokémon...".to_string(),
            message: String::new(),
            suggestions: Vec::new(),
        },
        LoadingState::Error(err) => EmptyStateViewModel {
            title: "Could not load the Pokédex".to_string(),
            message: format!("{}. Press r to retry.", err),
            suggestions: Vec::new(),
        },
        LoadingState::Loaded if !term.is_empty() => EmptyStateViewModel {
            title: "No Pokémon found".to_string(),
            message: format!("Nothing matches \"{}\". Try searching for:", term),
            suggestions: SEARCH_SUGGESTIONS.to_vec(),
        },
        LoadingState::Loaded => EmptyStateViewModel {
            title: "The Pokédex is empty".to_string(),
            message: "Press r to reload the catalog.".to_string(),
            suggestions: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeapi_client::{Pokemon, PokemonType, Sprites};
    use pokedex_pager::PagedFilterView;

    fn resource(name: &str, url: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn pikachu() -> Pokemon {
        Pokemon {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            base_experience: Some(112),
            types: vec![PokemonType {
                slot: 1,
                kind: resource("electric", "https://pokeapi.test/type/13/"),
            }],
            abilities: vec![],
            moves: vec![],
            stats: vec![],
            sprites: Sprites::default(),
            species: resource("pikachu", "https://pokeapi.test/pokemon-species/25/"),
        }
    }

    fn catalog(names: &[&str]) -> CatalogState {
        let entries = names
            .iter()
            .enumerate()
            .map(|(i, name)| Entry::new(*name, format!("https://pokeapi.test/pokemon/{}/", i + 1)))
            .collect();
        CatalogState {
            view: PagedFilterView::new(entries, 20),
            loading_state: LoadingState::Loaded,
            ..CatalogState::default()
        }
    }

    #[test]
    fn test_card_states() {
        let mut catalog = catalog(&["bulbasaur", "ivysaur", "pikachu"]);
        catalog
            .cards
            .insert("ivysaur".to_string(), CardState::Failed("timeout".to_string()));
        catalog
            .cards
            .insert("pikachu".to_string(), CardState::Loaded(Box::new(pikachu())));
        catalog.selected_card = 2;

        let vm = CatalogGridViewModel::from_state(&catalog);
        assert_eq!(vm.empty_state, None);

        assert_eq!(vm.cards[0].status, CardStatus::Loading);
        assert_eq!(vm.cards[0].dex_number, "#001");
        assert_eq!(vm.cards[0].name, "Bulbasaur");

        assert_eq!(vm.cards[1].status, CardStatus::Unavailable);
        assert_eq!(vm.cards[1].measurements, "details unavailable");

        let card = &vm.cards[2];
        assert_eq!(card.status, CardStatus::Ready);
        assert_eq!(card.dex_number, "#025");
        assert_eq!(card.types, vec!["electric"]);
        assert_eq!(card.measurements, "0.4m · 6.0kg");
        assert!(card.is_selected);
    }

    #[test]
    fn test_empty_search_offers_suggestions() {
        let mut catalog = catalog(&["bulbasaur"]);
        catalog.view.set_search_term("zzz");

        let vm = CatalogGridViewModel::from_state(&catalog);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.title, "No Pokémon found");
        assert_eq!(empty.suggestions, SEARCH_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_failed_catalog_mentions_retry() {
        let mut catalog = catalog(&[]);
        catalog.loading_state = LoadingState::Error("offline".to_string());

        let empty = CatalogGridViewModel::from_state(&catalog).empty_state.unwrap();
        assert!(empty.message.contains("Press r to retry"));
        assert!(empty.suggestions.is_empty());
    }
}
