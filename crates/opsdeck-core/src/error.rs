//! Error types module
//!
//! Two small taxonomies cover the whole system. `SourceError` is everything
//! that can go wrong talking to the entity source; it is caught at the load
//! controller boundary and becomes a `Failed` view state, never a panic.
//! `EngineError` covers misuse of the engine itself (mutating a collection
//! that is not loaded).
//!
//! Deliberately absent: an "empty result" error (zero matches is a valid
//! rendered state), a "stale response" error (superseded responses are
//! dropped internally and logged at debug), and an "invalid page" error
//! (out-of-range navigation is an ignored no-op).

use thiserror::Error;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like empty retries
    Debug,
    /// Warning level - for recoverable issues like transient network failures
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Failures from the entity source or write-back collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for entity source operations
pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    /// Whether a retry can plausibly succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SourceError::Http { status, .. } => *status >= 500 || *status == 429,
            SourceError::Transport(_) => true,
            SourceError::Decode(_) => false,
        }
    }

    /// Machine-readable error code (e.g., "TRANSPORT_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Http { .. } => "HTTP_ERROR",
            SourceError::Transport(_) => "TRANSPORT_ERROR",
            SourceError::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        if self.is_recoverable() {
            LogLevel::Warn
        } else {
            LogLevel::Error
        }
    }
}

/// Misuse of the engine's local state transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("collection is not loaded (state: {0})")]
    MutationUnavailable(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_recoverable() {
        let err = SourceError::Http {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.error_code(), "HTTP_ERROR");
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_client_errors_are_not_recoverable() {
        let err = SourceError::Http {
            status: 404,
            body: "not found".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_transport_error_display() {
        let err = SourceError::Transport("connection refused".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SourceError::from(inner);
        assert!(!err.is_recoverable());
        assert_eq!(err.error_code(), "DECODE_ERROR");
    }

    #[test]
    fn test_mutation_unavailable_display() {
        let err = EngineError::MutationUnavailable("loading");
        assert_eq!(
            err.to_string(),
            "collection is not loaded (state: loading)"
        );
    }
}
