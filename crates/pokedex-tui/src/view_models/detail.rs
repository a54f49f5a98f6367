use pokeapi_client::{DETAIL_MOVE_LIMIT, PokemonDetail, capitalize, pretty_name};

use crate::state::{DetailPanel, LoadingState};

/// View model for the detail overlay
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    /// "Pikachu #025" once loaded, the requested name before that
    pub title: String,
    pub body: DetailBody,
    pub scroll: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Error(String),
    Loaded(DetailSections),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSections {
    pub description: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub height: String,
    pub weight: String,
    pub base_experience: String,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub stats: Vec<StatRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: String,
    pub value: u32,
    /// Bar fill, 0.0..=1.0
    pub ratio: f64,
}

impl DetailViewModel {
    pub fn from_panel(panel: &DetailPanel) -> Self {
        let body = match (&panel.loading_state, &panel.detail) {
            (LoadingState::Error(err), _) => DetailBody::Error(err.clone()),
            (LoadingState::Loaded, Some(detail)) => DetailBody::Loaded(sections(detail)),
            _ => DetailBody::Loading,
        };

        let title = match &panel.detail {
            Some(detail) => format!(
                "{} {}",
                capitalize(&detail.pokemon.name),
                detail.pokemon.display_id()
            ),
            None => capitalize(&panel.name),
        };

        Self {
            title,
            body,
            scroll: panel.scroll,
        }
    }
}

fn sections(detail: &PokemonDetail) -> DetailSections {
    let pokemon = &detail.pokemon;

    DetailSections {
        description: detail
            .species
            .english_description()
            .unwrap_or_else(|| "No description available.".to_string()),
        image_url: pokemon.main_image().map(String::from),
        types: pokemon.type_names().into_iter().map(String::from).collect(),
        height: pokemon.height_label(),
        weight: pokemon.weight_label(),
        base_experience: pokemon.base_experience_label(),
        abilities: pokemon.ability_labels(),
        moves: pokemon.move_names(DETAIL_MOVE_LIMIT),
        stats: pokemon
            .stats
            .iter()
            .map(|stat| StatRow {
                label: pretty_name(&stat.stat.name),
                value: stat.base_stat,
                ratio: stat.ratio(),
            })
            .collect(),
    }
}
