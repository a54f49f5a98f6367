/// Background task system for network requests without blocking UI
use log::{debug, warn};
use pokeapi_client::{ApiError, PokeApiClient, Pokemon, PokemonDetail};
use pokedex_pager::Entry;
use std::sync::Arc;
use tokio::{
    sync::{Semaphore, mpsc},
    task::JoinHandle,
};

use crate::state::TaskStatus;

/// Results from background task execution
/// These are sent back to the main loop and converted to Actions
#[derive(Debug)]
pub enum TaskResult {
    /// Catalog list fetched
    CatalogLoaded(Result<Vec<Entry>, String>),

    /// One card of the visible page fetched (entry name, result)
    CardLoaded(String, Result<Box<Pokemon>, String>),

    /// Pokemon and species fetched for the detail view (name, result)
    DetailLoaded(String, Result<Box<PokemonDetail>, String>),

    /// Task status update
    TaskStatusUpdate(Option<TaskStatus>),
}

/// Background tasks that can be executed asynchronously
#[derive(Debug)]
pub enum BackgroundTask {
    LoadCatalog {
        limit: usize,
        client: PokeApiClient,
    },
    LoadCards {
        entries: Vec<Entry>,
        max_concurrent: usize,
        client: PokeApiClient,
    },
    LoadDetail {
        name: String,
        client: PokeApiClient,
    },
}

/// Card fetches of the latest batch plus the request budget shared by all batches
#[derive(Default)]
struct CardFetcher {
    permits: Option<Arc<Semaphore>>,
    in_flight: Vec<JoinHandle<()>>,
}

impl CardFetcher {
    /// The budget is sized by the first batch and reused afterwards
    fn permits(&mut self, max_concurrent: usize) -> Arc<Semaphore> {
        self.permits
            .get_or_insert_with(|| Arc::new(Semaphore::new(max_concurrent.max(1))))
            .clone()
    }

    /// Abort whatever the previous batch still has running
    fn replace_batch(&mut self, handles: Vec<JoinHandle<()>>) {
        let aborted = self.in_flight.len();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        if aborted > 0 {
            debug!("Replaced card batch, aborted {} pending request(s)", aborted);
        }
        self.in_flight = handles;
    }
}

/// Background task worker that processes network requests without blocking UI
///
/// Every task runs on its own tokio task so a slow card batch never holds
/// back the detail view. A new card batch replaces the previous one.
pub fn start_task_worker(
    mut task_rx: mpsc::UnboundedReceiver<BackgroundTask>,
    result_tx: mpsc::UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut cards = CardFetcher::default();

        while let Some(task) = task_rx.recv().await {
            match task {
                BackgroundTask::LoadCatalog { limit, client } => {
                    let result_tx = result_tx.clone();
                    tokio::spawn(async move {
                        let result = client
                            .list_pokemon(limit)
                            .await
                            .map(|resources| {
                                resources
                                    .into_iter()
                                    .map(|r| Entry::new(r.name, r.url))
                                    .collect::<Vec<_>>()
                            })
                            .map_err(|e| {
                                warn!("Failed to load catalog: {}", e);
                                format!("Failed to load Pokémon list: {}", e)
                            });
                        let _ = result_tx.send(TaskResult::CatalogLoaded(result));
                    });
                }
                BackgroundTask::LoadCards {
                    entries,
                    max_concurrent,
                    client,
                } => {
                    let semaphore = cards.permits(max_concurrent);
                    let mut handles = Vec::with_capacity(entries.len());

                    for entry in entries {
                        let client = client.clone();
                        let semaphore = semaphore.clone();
                        let result_tx = result_tx.clone();

                        handles.push(tokio::spawn(async move {
                            let Ok(_permit) = semaphore.acquire_owned().await else {
                                return;
                            };
                            let result = fetch_card(&client, &entry)
                                .await
                                .map(Box::new)
                                .map_err(|e| {
                                    debug!("Card {} failed: {}", entry.name, e);
                                    describe_error(&entry.name, &e)
                                });
                            let _ = result_tx.send(TaskResult::CardLoaded(entry.name, result));
                        }));
                    }

                    cards.replace_batch(handles);
                }
                BackgroundTask::LoadDetail { name, client } => {
                    let result_tx = result_tx.clone();
                    tokio::spawn(async move {
                        let result = client
                            .pokemon_detail(&name)
                            .await
                            .map(Box::new)
                            .map_err(|e| {
                                warn!("Failed to load details for {}: {}", name, e);
                                describe_error(&name, &e)
                            });
                        if let Err(ref message) = result {
                            let _ = result_tx.send(TaskResult::TaskStatusUpdate(Some(
                                TaskStatus::error(message.clone()),
                            )));
                        }
                        let _ = result_tx.send(TaskResult::DetailLoaded(name, result));
                    });
                }
            }
        }
    })
}

/// Cards are fetched through the entry's locator; the name is the fallback
async fn fetch_card(client: &PokeApiClient, entry: &Entry) -> Result<Pokemon, ApiError> {
    if entry.locator.is_empty() {
        client.pokemon(&entry.name).await
    } else {
        client.pokemon_by_url(&entry.locator).await
    }
}

/// User-facing message for a failed request
fn describe_error(name: &str, err: &ApiError) -> String {
    if err.is_not_found() {
        format!("Pokémon \"{}\" not found", name)
    } else {
        format!("Could not load \"{}\": {}", name, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_not_found() {
        let err = ApiError::NotFound {
            url: "https://pokeapi.test/pokemon/missingno".to_string(),
        };
        assert_eq!(
            describe_error("missingno", &err),
            "Pokémon \"missingno\" not found"
        );
    }

    #[tokio::test]
    async fn test_new_batch_aborts_previous_one() {
        let mut cards = CardFetcher::default();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        // Holds the sender until aborted
        let stuck = tokio::spawn(async move {
            let _tx = tx;
            std::future::pending::<()>().await;
        });
        cards.replace_batch(vec![stuck]);
        cards.replace_batch(Vec::new());

        assert!(rx.await.is_err());
        assert!(cards.in_flight.is_empty());
    }

    #[test]
    fn test_permits_are_shared_across_batches() {
        let mut cards = CardFetcher::default();
        let first = cards.permits(3);
        let second = cards.permits(8);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.available_permits(), 3);
    }

    #[test]
    fn test_describe_status_error() {
        let err = ApiError::Status {
            status: 503,
            url: "https://pokeapi.test/pokemon/pikachu".to_string(),
        };
        let message = describe_error("pikachu", &err);
        assert!(message.starts_with("Could not load \"pikachu\""));
    }
}
