//! Scriptable [`EntitySource`] implementations.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use opsdeck_core::error::SourceError;
use opsdeck_engine::EntitySource;

/// Serves the same snapshot on every fetch and counts the calls.
pub struct StaticSource<E> {
    items: Vec<E>,
    fetches: AtomicUsize,
}

impl<E> StaticSource<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self {
            items,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<E: Clone + Send + Sync> EntitySource<E> for StaticSource<E> {
    async fn fetch_collection(&self) -> Result<Vec<E>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}

/// Always fails with the given HTTP status.
pub struct FailingSource {
    pub status: u16,
}

#[async_trait]
impl<E: Send + Sync> EntitySource<E> for FailingSource {
    async fn fetch_collection(&self) -> Result<Vec<E>, SourceError> {
        Err(SourceError::Http {
            status: self.status,
            body: "upstream unavailable".to_string(),
        })
    }
}
