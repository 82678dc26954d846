//! Detail overlay
//!
//! An overlay pins a snapshot of one entity for a detail panel. The snapshot
//! is the `Arc` taken at open time, so later collection mutations (which
//! replace entries rather than editing them in place) never change what an
//! open overlay shows.

use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub enum Overlay<E> {
    #[default]
    Closed,
    Open(Arc<E>),
}

impl<E> Overlay<E> {
    /// Open on `entity`, replacing any previous snapshot.
    pub fn open(&mut self, entity: Arc<E>) {
        *self = Overlay::Open(entity);
    }

    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn snapshot(&self) -> Option<&Arc<E>> {
        match self {
            Overlay::Open(entity) => Some(entity),
            Overlay::Closed => None,
        }
    }
}
