//! [`EntitySource`] adapters binding the HTTP client to the engine.
//!
//! One adapter per entity kind; each is a cheap handle around a shared
//! [`ApiClient`] and can be cloned into as many loaders as needed.

use async_trait::async_trait;

use opsdeck_core::error::SourceError;
use opsdeck_core::models::{FeatureFlag, Organization, Review, User};
use opsdeck_engine::EntitySource;

use crate::ApiClient;

#[derive(Clone, Debug)]
pub struct OrganizationSource {
    client: ApiClient,
}

impl OrganizationSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntitySource<Organization> for OrganizationSource {
    async fn fetch_collection(&self) -> Result<Vec<Organization>, SourceError> {
        self.client.fetch_organizations().await
    }
}

#[derive(Clone, Debug)]
pub struct UserSource {
    client: ApiClient,
}

impl UserSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntitySource<User> for UserSource {
    async fn fetch_collection(&self) -> Result<Vec<User>, SourceError> {
        self.client.fetch_users().await
    }
}

#[derive(Clone, Debug)]
pub struct FeatureFlagSource {
    client: ApiClient,
}

impl FeatureFlagSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntitySource<FeatureFlag> for FeatureFlagSource {
    async fn fetch_collection(&self) -> Result<Vec<FeatureFlag>, SourceError> {
        self.client.fetch_feature_flags().await
    }
}

#[derive(Clone, Debug)]
pub struct ReviewSource {
    client: ApiClient,
}

impl ReviewSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntitySource<Review> for ReviewSource {
    async fn fetch_collection(&self) -> Result<Vec<Review>, SourceError> {
        self.client.fetch_reviews().await
    }
}
