//! PokeAPI v2 client
//!
//! A small async client for the handful of PokeAPI endpoints the explorer
//! needs: the full pokemon list, a single pokemon and its species.
//!
//! # Example
//!
//! ```no_run
//! use pokeapi_client::PokeApiClient;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), pokeapi_client::ApiError> {
//! let client = PokeApiClient::new(PokeApiClient::DEFAULT_BASE_URL, Duration::from_secs(10))?;
//! let list = client.list_pokemon(1000).await?;
//! let detail = client.pokemon_detail(&list[0].name).await?;
//! println!("{} {}", detail.pokemon.display_id(), detail.pokemon.name);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::PokeApiClient;
pub use error::ApiError;
pub use types::*;
