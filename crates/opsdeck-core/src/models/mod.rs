//! Data models for the dashboard
//!
//! This module contains the entity types the list views operate on, plus the
//! read-only stat widgets and the platform settings form model. Each
//! sub-module represents one entity kind.

mod feature_flag;
mod kind;
mod organization;
mod review;
mod settings;
mod stats;
mod user;

// Re-export all models for convenient imports
pub use feature_flag::*;
pub use kind::*;
pub use organization::*;
pub use review::*;
pub use settings::*;
pub use stats::*;
pub use user::*;
