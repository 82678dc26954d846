//! Ordered entity collection
//!
//! Entries are held behind `Arc` so that the mutation reducer can rebuild a
//! collection while keeping the identity of untouched rows: downstream
//! consumers can diff pages with `Arc::ptr_eq` instead of deep equality.
//! The query engine only ever reads a collection; replacement happens
//! wholesale through the load controller or entry-by-entry through
//! [`crate::mutation::apply_toggle`].

use std::sync::Arc;

/// Ordered, immutable-entry collection of one entity kind.
#[derive(Debug)]
pub struct Collection<E> {
    entries: Vec<Arc<E>>,
}

// Manual impl: cloning shares `Arc`s, so `E: Clone` is not required.
impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<E> Collection<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self {
            entries: entries.into_iter().map(Arc::new).collect(),
        }
    }

    pub(crate) fn from_arcs(entries: Vec<Arc<E>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<E>> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<E>> {
        self.entries.get(index)
    }
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> FromIterator<E> for Collection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
