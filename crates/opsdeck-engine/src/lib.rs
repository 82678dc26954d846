//! Opsdeck list/detail state engine.
//!
//! Everything a dashboard view needs between "raw fetched collection" and
//! "rows on screen": a composable search/filter predicate layer, a
//! deterministic pagination engine, per-view query state with the
//! reset-page-on-change invariant, an async load controller with
//! last-request-wins semantics, a single-entity detail overlay, and an
//! optimistic toggle reducer.
//!
//! The engine never talks to the network itself; it consumes any
//! [`EntitySource`] implementation (see `opsdeck-client` for the HTTP one).
//! Filtering and pagination are pure and cheap enough to recompute on every
//! keystroke.

pub mod collection;
pub mod descriptor;
pub mod loader;
pub mod mutation;
pub mod predicate;
pub mod query;
pub mod selection;
pub mod view;

// Re-export the working set
pub use collection::Collection;
pub use descriptor::{Queryable, Toggleable};
pub use loader::{EntitySource, LoadState, ViewLoader};
pub use mutation::apply_toggle;
pub use predicate::{FilterMap, FilterValue, Predicate};
pub use query::{paginate, Page};
pub use selection::Overlay;
pub use view::ListView;
