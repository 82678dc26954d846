//! In-place collection mutations
//!
//! Entities are immutable once loaded; a mutation builds a new collection
//! that shares every untouched entry's `Arc` with the old one and replaces
//! only the targeted entity. Missing ids are a silent no-op, matching the
//! optimistic-update flow where the row may have been reloaded away.

use tracing::debug;

use crate::collection::Collection;
use crate::descriptor::{Queryable, Toggleable};

/// Flip the toggleable state of the entity with `id`, preserving order and
/// the identity of every other entry.
pub fn apply_toggle<E>(collection: &Collection<E>, id: &str) -> Collection<E>
where
    E: Queryable + Toggleable,
{
    let mut found = false;
    let entries = collection
        .iter()
        .map(|entry| {
            if entry.id() == id {
                found = true;
                std::sync::Arc::new(entry.as_ref().toggled())
            } else {
                entry.clone()
            }
        })
        .collect();

    if !found {
        debug!(id, "toggle target not present, leaving collection unchanged");
    }

    Collection::from_arcs(entries)
}
