//! Collection loading
//!
//! [`ViewLoader`] owns the load lifecycle of one entity collection. Every
//! load attempt gets a fresh generation number; a response only lands if its
//! generation is still current, so a newer request (or a detach) silently
//! drops the stale one instead of clobbering the state.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use opsdeck_core::error::{EngineError, SourceError};

use crate::collection::Collection;

/// Where a collection stands in its load lifecycle. Failures keep only the
/// rendered message; the typed [`SourceError`] is consumed at commit time.
#[derive(Debug, Clone, Default)]
pub enum LoadState<E> {
    #[default]
    Idle,
    Loading,
    Loaded(Collection<E>),
    Failed(String),
}

impl<E> LoadState<E> {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Backend seam: anything that can produce the full entity list for one
/// collection. The HTTP client implements this per entity kind.
#[async_trait]
pub trait EntitySource<E>: Send + Sync {
    async fn fetch_collection(&self) -> Result<Vec<E>, SourceError>;
}

pub struct ViewLoader<E> {
    source: Arc<dyn EntitySource<E>>,
    state: LoadState<E>,
    generation: u64,
}

impl<E: Send + Sync + 'static> ViewLoader<E> {
    pub fn new(source: Arc<dyn EntitySource<E>>) -> Self {
        Self {
            source,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &LoadState<E> {
        &self.state
    }

    pub fn collection(&self) -> Option<&Collection<E>> {
        match &self.state {
            LoadState::Loaded(collection) => Some(collection),
            _ => None,
        }
    }

    /// Start a load attempt: transition to `Loading` and hand back the
    /// generation token the eventual [`commit`](Self::commit) must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Land the outcome of attempt `generation`. Outcomes from superseded
    /// attempts are dropped without touching the state.
    pub fn commit(&mut self, generation: u64, outcome: Result<Vec<E>, SourceError>) {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "dropping superseded load response"
            );
            return;
        }
        match outcome {
            Ok(items) => {
                info!(count = items.len(), "collection loaded");
                self.state = LoadState::Loaded(Collection::new(items));
            }
            Err(err) => {
                warn!(error = %err, recoverable = err.is_recoverable(), "collection load failed");
                self.state = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Invalidate any in-flight attempt, e.g. when the owning view goes
    /// away. The next `begin` resumes normally.
    pub fn detach(&mut self) {
        self.generation += 1;
    }

    /// Run one full load round trip against the source.
    pub async fn load(&mut self) {
        let generation = self.begin();
        let outcome = self.source.fetch_collection().await;
        self.commit(generation, outcome);
    }

    /// Swap in a mutated collection, handing back the prior one so the
    /// caller can roll back if the backing write fails. Only a loaded
    /// collection can be mutated.
    pub fn replace(&mut self, collection: Collection<E>) -> Result<Collection<E>, EngineError> {
        match std::mem::replace(&mut self.state, LoadState::Loaded(collection)) {
            LoadState::Loaded(prior) => Ok(prior),
            other => {
                let name = other.name();
                self.state = other;
                Err(EngineError::MutationUnavailable(name))
            }
        }
    }
}
