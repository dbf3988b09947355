//! Record store: the loaded advocate collection and its fetch lifecycle.
//!
//! The store holds the full, unfiltered collection behind an `Arc` and the
//! loading/ready/error phase the UI renders from. Loads are tagged with a
//! generation counter; a completion whose tag is no longer current is
//! dropped, so the last initiated load always determines final state.

use std::sync::Arc;

use crate::api::{DirectoryClient, LoadError};
use crate::model::Advocate;

/// User-facing message for any load failure. Details go to the logs only.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load advocates. Please try again later.";

/// Fetch lifecycle as seen by the UI.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// A load is in flight; nothing to render yet.
    #[default]
    Loading,
    /// The collection is loaded and immutable until the next reload.
    Ready(Arc<Vec<Advocate>>),
    /// The last load failed; the payload is the user-facing message.
    Error(String),
}

/// Holds the collection plus the lifecycle state.
#[derive(Debug, Default)]
pub struct AdvocateStore {
    state: LoadState,
    generation: u64,
}

impl AdvocateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The loaded collection, when ready.
    pub fn advocates(&self) -> Option<&Arc<Vec<Advocate>>> {
        match &self.state {
            LoadState::Ready(advocates) => Some(advocates),
            LoadState::Loading | LoadState::Error(_) => None,
        }
    }

    /// Mark a new load as started and return its generation tag.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        tracing::debug!(generation = self.generation, "load started");
        self.generation
    }

    /// Record the outcome of the load tagged `generation`.
    ///
    /// Returns false, changing nothing, when a newer load has been started
    /// since the tagged one.
    pub fn finish_load(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Advocate>, LoadError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "stale load completion ignored"
            );
            return false;
        }

        self.state = match outcome {
            Ok(advocates) => {
                tracing::info!(count = advocates.len(), "store ready");
                LoadState::Ready(Arc::new(advocates))
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed");
                LoadState::Error(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Run one full load against `client` and return the resulting state.
    pub async fn load(&mut self, client: &DirectoryClient) -> &LoadState {
        let generation = self.begin_load();
        let outcome = client.fetch_advocates().await;
        self.finish_load(generation, outcome);
        &self.state
    }
}
