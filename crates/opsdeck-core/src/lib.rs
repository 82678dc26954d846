//! Opsdeck Core Library
//!
//! This crate provides the domain models, error types, and configuration
//! shared across all Opsdeck components. The list/detail state engine lives
//! in `opsdeck-engine`; the HTTP entity source lives in `opsdeck-client`.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{EngineError, LogLevel, SourceError, SourceResult};
