//! Configuration module
//!
//! Client configuration is passed in as a constructor parameter, never read
//! from a global. `from_env` exists for the common deployment path where the
//! dashboard host injects `OPSDECK_API_URL`.

use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size used by the tabular views (organizations, users).
pub const TABLE_PAGE_SIZE: usize = 5;

/// Configuration for the HTTP entity source.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API base address, e.g. "http://localhost:8000"
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read configuration from the environment: OPSDECK_API_URL (or API_URL)
    /// and OPSDECK_TIMEOUT_SECS.
    pub fn from_env() -> Self {
        let base_url = env::var("OPSDECK_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("OPSDECK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_new_overrides_base_url_only() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 30);
    }
}
