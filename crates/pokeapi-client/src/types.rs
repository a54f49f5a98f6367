//! Response types for the PokeAPI endpoints we consume
//!
//! Only the fields the explorer renders are modelled; serde ignores the rest.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Trailing numeric path segment of a resource URL, e.g. `.../pokemon/25/`
static RESOURCE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)/?$").expect("valid resource id regex"));

/// Base stats top out at 255 in every generation
pub const MAX_BASE_STAT: u32 = 255;

/// How many moves the detail view lists
pub const DETAIL_MOVE_LIMIT: usize = 10;

/// A `{ name, url }` reference as used all over PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded in the resource URL, if any
    pub fn id(&self) -> Option<u32> {
        RESOURCE_ID
            .captures(&self.url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// Response of `GET /pokemon?limit=N`
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResourceList {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub sprites: Sprites,
    pub species: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<SpriteSet>,
    pub dream_world: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// A pokemon together with its species, as shown on the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    pub species: Species,
}

/// Replace the first dash with a space: "special-attack" -> "special attack"
pub fn pretty_name(name: &str) -> String {
    name.replacen('-', " ", 1)
}

/// Capitalize the first character for headings
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a pokedex number as `#001`
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

impl Pokemon {
    pub fn display_id(&self) -> String {
        format_dex_number(self.id)
    }

    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// "0.7m"
    pub fn height_label(&self) -> String {
        format!("{:.1}m", self.height_m())
    }

    /// "6.9kg"
    pub fn weight_label(&self) -> String {
        format!("{:.1}kg", self.weight_kg())
    }

    pub fn base_experience_label(&self) -> String {
        match self.base_experience {
            Some(xp) if xp > 0 => xp.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        let mut types: Vec<&PokemonType> = self.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        types.into_iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Best available artwork: official artwork, then dream world, then the default sprite
    pub fn main_image(&self) -> Option<&str> {
        let other = &self.sprites.other;
        other
            .official_artwork
            .as_ref()
            .and_then(|s| s.front_default.as_deref())
            .or_else(|| {
                other
                    .dream_world
                    .as_ref()
                    .and_then(|s| s.front_default.as_deref())
            })
            .or(self.sprites.front_default.as_deref())
    }

    /// The first few moves, prettified
    pub fn move_names(&self, limit: usize) -> Vec<String> {
        self.moves
            .iter()
            .take(limit)
            .map(|m| pretty_name(&m.move_ref.name))
            .collect()
    }

    /// Ability labels with hidden abilities marked
    pub fn ability_labels(&self) -> Vec<String> {
        self.abilities
            .iter()
            .map(|a| {
                let name = pretty_name(&a.ability.name);
                if a.is_hidden {
                    format!("{} (hidden)", name)
                } else {
                    name
                }
            })
            .collect()
    }
}

impl PokemonStat {
    /// Fill ratio for a stat bar, 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        (self.base_stat.min(MAX_BASE_STAT) as f64) / MAX_BASE_STAT as f64
    }
}

impl Species {
    /// First English flavor text with form feeds turned into spaces
    pub fn english_description(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text.replace('\u{c}', " "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "moves": [
            { "move": { "name": "mega-punch", "url": "https://pokeapi.co/api/v2/move/5/" } },
            { "move": { "name": "pay-day", "url": "https://pokeapi.co/api/v2/move/6/" } },
            { "move": { "name": "thunder-punch", "url": "https://pokeapi.co/api/v2/move/9/" } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } }
        ],
        "sprites": {
            "front_default": "https://img.test/front/25.png",
            "other": {
                "dream_world": { "front_default": "https://img.test/dream/25.svg" },
                "official-artwork": { "front_default": "https://img.test/art/25.png", "front_shiny": null }
            }
        },
        "species": { "name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/" },
        "order": 35
    }"#;

    fn pikachu() -> Pokemon {
        serde_json::from_str(PIKACHU_JSON).unwrap()
    }

    #[test]
    fn test_decode_pokemon() {
        let p = pikachu();
        assert_eq!(p.id, 25);
        assert_eq!(p.name, "pikachu");
        assert_eq!(p.type_names(), vec!["electric"]);
        assert_eq!(p.species.id(), Some(25));
    }

    #[test]
    fn test_display_helpers() {
        let p = pikachu();
        assert_eq!(p.display_id(), "#025");
        assert_eq!(p.height_label(), "0.4m");
        assert_eq!(p.weight_label(), "6.0kg");
        assert_eq!(p.base_experience_label(), "112");
    }

    #[test]
    fn test_base_experience_missing() {
        let mut p = pikachu();
        p.base_experience = None;
        assert_eq!(p.base_experience_label(), "N/A");
        p.base_experience = Some(0);
        assert_eq!(p.base_experience_label(), "N/A");
    }

    #[test]
    fn test_main_image_preference() {
        let mut p = pikachu();
        assert_eq!(p.main_image(), Some("https://img.test/art/25.png"));

        p.sprites.other.official_artwork = None;
        assert_eq!(p.main_image(), Some("https://img.test/dream/25.svg"));

        p.sprites.other.dream_world = None;
        assert_eq!(p.main_image(), Some("https://img.test/front/25.png"));

        p.sprites.front_default = None;
        assert_eq!(p.main_image(), None);
    }

    #[test]
    fn test_moves_and_abilities() {
        let p = pikachu();
        assert_eq!(p.move_names(2), vec!["mega punch", "pay day"]);
        assert_eq!(p.move_names(DETAIL_MOVE_LIMIT).len(), 3);
        assert_eq!(
            p.ability_labels(),
            vec!["static".to_string(), "lightning rod (hidden)".to_string()]
        );
    }

    #[test]
    fn test_stat_ratio() {
        let p = pikachu();
        assert!((p.stats[0].ratio() - 35.0 / 255.0).abs() < f64::EPSILON);
        let maxed = PokemonStat {
            base_stat: 300,
            effort: 0,
            stat: NamedResource {
                name: "hp".into(),
                url: String::new(),
            },
        };
        assert_eq!(maxed.ratio(), 1.0);
    }

    #[test]
    fn test_resource_id() {
        let with_slash = NamedResource {
            name: "bulbasaur".into(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
        };
        assert_eq!(with_slash.id(), Some(1));

        let without_slash = NamedResource {
            name: "mew".into(),
            url: "https://pokeapi.co/api/v2/pokemon/151".into(),
        };
        assert_eq!(without_slash.id(), Some(151));

        let no_id = NamedResource {
            name: "x".into(),
            url: "https://pokeapi.co/api/v2/pokemon/".into(),
        };
        assert_eq!(no_id.id(), None);
    }

    #[test]
    fn test_decode_list() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let list: NamedResourceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1302);
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[1].name, "ivysaur");
        assert!(list.previous.is_none());
    }

    #[test]
    fn test_english_description() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "flavor_text_entries": [
                { "flavor_text": "Quand plusieurs", "language": { "name": "fr", "url": "" } },
                { "flavor_text": "When several of\nthese POKéMON\u000cgather", "language": { "name": "en", "url": "" } },
                { "flavor_text": "Second english", "language": { "name": "en", "url": "" } }
            ]
        }"#;
        let species: Species = serde_json::from_str(json).unwrap();
        assert_eq!(
            species.english_description().as_deref(),
            Some("When several of\nthese POKéMON gather")
        );
    }

    #[test]
    fn test_no_english_description() {
        let species = Species {
            id: 1,
            name: "x".into(),
            flavor_text_entries: Vec::new(),
        };
        assert_eq!(species.english_description(), None);
    }

    #[test]
    fn test_name_helpers() {
        assert_eq!(pretty_name("special-attack"), "special attack");
        assert_eq!(pretty_name("mr-mime-galar"), "mr mime-galar");
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
        assert_eq!(format_dex_number(7), "#007");
        assert_eq!(format_dex_number(1025), "#1025");
    }
}
