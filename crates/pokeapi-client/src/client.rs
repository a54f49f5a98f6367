use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::ApiError,
    types::{NamedResource, NamedResourceList, Pokemon, PokemonDetail, Species},
};

/// Thin async wrapper around the PokeAPI REST endpoints
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";

    /// Create a client for `base_url` (without trailing slash is fine either way)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&base_url.into())?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first `limit` pokemon references
    pub async fn list_pokemon(&self, limit: usize) -> Result<Vec<NamedResource>, ApiError> {
        let url = self.list_url(limit);
        let list: NamedResourceList = self.get_json(&url).await?;
        debug!(
            "Fetched {} of {} pokemon from {}",
            list.results.len(),
            list.count,
            url
        );
        Ok(list.results)
    }

    /// Fetch a pokemon by id or name
    pub async fn pokemon(&self, id_or_name: &str) -> Result<Pokemon, ApiError> {
        let url = self.pokemon_url(id_or_name);
        self.get_json(&url).await
    }

    /// Fetch a pokemon through the locator URL of a list entry
    pub async fn pokemon_by_url(&self, url: &str) -> Result<Pokemon, ApiError> {
        self.get_json(url).await
    }

    /// Fetch a species resource (flavor texts) by its URL
    pub async fn species(&self, url: &str) -> Result<Species, ApiError> {
        self.get_json(url).await
    }

    /// Fetch a pokemon and then its species
    pub async fn pokemon_detail(&self, id_or_name: &str) -> Result<PokemonDetail, ApiError> {
        let pokemon = self.pokemon(id_or_name).await?;
        let species = self.species(&pokemon.species.url).await?;
        Ok(PokemonDetail { pokemon, species })
    }

    fn list_url(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    fn pokemon_url(&self, id_or_name: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.base_url,
            id_or_name.trim().to_lowercase()
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        decode(url, &body)
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PokeApiClient {
        PokeApiClient::new("https://pokeapi.co/api/v2/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(client().base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            normalize_base_url("  http://localhost:8080//  ").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = PokeApiClient::new("pokeapi.co", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_endpoint_urls() {
        let client = client();
        assert_eq!(
            client.list_url(1000),
            "https://pokeapi.co/api/v2/pokemon?limit=1000"
        );
        assert_eq!(
            client.pokemon_url(" Pikachu "),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
        assert_eq!(
            client.pokemon_url("25"),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }

    #[test]
    fn test_decode_error_keeps_url() {
        let err = decode::<NamedResourceList>("https://x.test/pokemon", "{not json").unwrap_err();
        match err {
            ApiError::Decode { url, .. } => assert_eq!(url, "https://x.test/pokemon"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_helper() {
        let err = ApiError::NotFound {
            url: "https://x.test".into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: https://x.test");
    }
}
