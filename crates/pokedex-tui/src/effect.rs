/// Effect system for Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects to perform
/// The update() function executes these effects
use anyhow::Result;
use log::{debug, warn};
use pokeapi_client::PokeApiClient;
use pokedex_pager::Entry;

use crate::{
    App,
    actions::Action,
    config::BASE_URL_ENV,
    state::TaskStatus,
    task::BackgroundTask,
};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load .env file if the base URL override is not already set
    LoadEnvFile,

    /// Initialize the API client (must happen after LoadEnvFile)
    InitializeClient,

    /// Fetch the catalog list in the background
    LoadCatalog { limit: usize },

    /// Fetch card details for entries of the visible page
    LoadCards { entries: Vec<Entry> },

    /// Fetch pokemon and species for the detail view
    LoadDetail { name: String },

    /// Dispatch another action (for chaining)
    DispatchAction(Action),

    /// Batch multiple effects
    Batch(Vec<Effect>),

    /// No effect
    None,
}

impl Effect {
    /// Create a batch of effects
    pub fn batch(effects: Vec<Effect>) -> Self {
        Effect::Batch(effects)
    }
}

/// Execute an effect and return follow-up actions to dispatch
pub async fn execute_effect(app: &mut App, effect: Effect) -> Result<Vec<Action>> {
    let mut follow_up_actions = Vec::new();

    match effect {
        Effect::None => {}

        Effect::LoadEnvFile => {
            if std::env::var(BASE_URL_ENV).is_err() {
                match dotenvy::dotenv() {
                    Ok(path) => {
                        debug!("Loaded .env file from: {:?}", path);
                    }
                    Err(_) => {
                        debug!(".env file not found, using configured base URL");
                    }
                }
            }
        }

        Effect::InitializeClient => {
            let config = &app.store.state().config;
            let base_url = config.effective_base_url();

            match PokeApiClient::new(base_url, config.request_timeout()) {
                Ok(client) => {
                    debug!("API client initialized for {}", client.base_url());
                    app.client = Some(client);
                }
                Err(e) => {
                    warn!("Failed to initialize API client: {}", e);
                    follow_up_actions.push(Action::SetTaskStatus(Some(TaskStatus::error(
                        format!("Failed to initialize API client: {}", e),
                    ))));
                }
            }
        }

        Effect::LoadCatalog { limit } => match app.client.clone() {
            Some(client) => {
                follow_up_actions.push(Action::SetTaskStatus(Some(TaskStatus::running(
                    "Loading Pokémon catalog...",
                ))));
                let _ = app
                    .task_tx
                    .send(BackgroundTask::LoadCatalog { limit, client });
            }
            None => {
                follow_up_actions.push(Action::CatalogLoaded(Err(
                    "API client is not available".to_string(),
                )));
            }
        },

        Effect::LoadCards { entries } => {
            let Some(client) = app.client.clone() else {
                for entry in entries {
                    follow_up_actions.push(Action::CardLoaded(
                        entry.name,
                        Err("API client is not available".to_string()),
                    ));
                }
                return Ok(follow_up_actions);
            };

            debug!("Requesting {} card(s)", entries.len());
            let _ = app.task_tx.send(BackgroundTask::LoadCards {
                entries,
                max_concurrent: app.store.state().config.max_concurrent_requests,
                client,
            });
        }

        Effect::LoadDetail { name } => match app.client.clone() {
            Some(client) => {
                let _ = app.task_tx.send(BackgroundTask::LoadDetail { name, client });
            }
            None => {
                follow_up_actions.push(Action::DetailLoaded(
                    name,
                    Err("API client is not available".to_string()),
                ));
            }
        },

        Effect::DispatchAction(action) => {
            follow_up_actions.push(action);
        }

        Effect::Batch(effects) => {
            for effect in effects {
                let actions = Box::pin(execute_effect(app, effect)).await?;
                follow_up_actions.extend(actions);
            }
        }
    }

    Ok(follow_up_actions)
}
