//! HTTP client for the Opsdeck admin API.
//!
//! Provides a thin client over the dashboard backend with generic
//! GET/PUT/POST helpers, domain methods per entity kind, and
//! [`EntitySource`](opsdeck_engine::EntitySource) adapters that plug the
//! backend into the engine's load controller.
//!
//! Errors are classified into [`SourceError`] at this boundary: transport
//! failures, non-2xx responses (with the body preserved for display), and
//! decode failures each carry their own variant so callers can decide what
//! is worth retrying.

pub mod api;
pub mod source;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use opsdeck_core::config::ClientConfig;
use opsdeck_core::error::{SourceError, SourceResult};

pub use source::{FeatureFlagSource, OrganizationSource, ReviewSource, UserSource};

/// HTTP client for the admin API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from environment: OPSDECK_API_URL (or API_URL) and
    /// OPSDECK_TIMEOUT_SECS, with localhost defaults.
    pub fn from_env() -> SourceResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and deserialize the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> SourceResult<T> {
        let url = self.build_url(path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Self::decode(response).await
    }

    /// PUT a JSON body and deserialize the response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> SourceResult<T> {
        let url = self.build_url(path);
        debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Self::decode(response).await
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> SourceResult<T> {
        let url = self.build_url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Self::decode(response).await
    }

    /// PUT a JSON body, discarding any response body on success.
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> SourceResult<()> {
        let url = self.build_url(path);
        debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Self::check_status(response).await
    }

    /// POST a JSON body, discarding any response body on success.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> SourceResult<()> {
        let url = self.build_url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        Self::check_status(response).await
    }

    async fn check_status(response: reqwest::Response) -> SourceResult<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|err| SourceError::Transport(err.to_string()))?;
            return Err(SourceError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> SourceResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
