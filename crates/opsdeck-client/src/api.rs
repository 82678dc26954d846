//! Domain methods for the admin API client.
//!
//! Every collection endpoint wraps its array in a JSON envelope keyed by the
//! collection, e.g. `{"organizations": [...]}`. The envelope key matches the
//! URL path segment except for feature flags, which travel as `featureFlags`
//! in the body but `feature-flags` on the wire path.

use serde::de::{DeserializeOwned, Error as DeError};
use serde::Serialize;

use opsdeck_core::error::{SourceError, SourceResult};
use opsdeck_core::models::{
    AdminSettings, ChartDataPoint, DashboardStats, EntityKind, FeatureFlag, FlagStatus,
    Organization, OrganizationStats, ReplyStatus, Review, User,
};

use crate::ApiClient;

/// Pull the entity array out of a collection response body, addressed by the
/// kind's envelope key.
fn unwrap_envelope<T: DeserializeOwned>(
    kind: EntityKind,
    mut body: serde_json::Value,
) -> SourceResult<Vec<T>> {
    let key = kind.envelope_key();
    match body.get_mut(key).map(serde_json::Value::take) {
        Some(rows) => Ok(serde_json::from_value(rows)?),
        None => Err(SourceError::Decode(serde_json::Error::custom(format!(
            "missing envelope key \"{key}\""
        )))),
    }
}

/// Body for `POST /organizations`; the backend assigns id and initial status.
#[derive(Debug, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub domain: String,
}

#[derive(Debug, Serialize)]
struct FlagStatusBody {
    status: FlagStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyStatusBody {
    reply_status: ReplyStatus,
}

impl ApiClient {
    /// GET one collection endpoint and unwrap its envelope.
    async fn fetch_list<T: DeserializeOwned>(&self, kind: EntityKind) -> SourceResult<Vec<T>> {
        let body: serde_json::Value = self.get(&format!("/{}", kind.path_segment())).await?;
        unwrap_envelope(kind, body)
    }

    pub async fn fetch_organizations(&self) -> SourceResult<Vec<Organization>> {
        self.fetch_list(EntityKind::Organizations).await
    }

    pub async fn fetch_users(&self) -> SourceResult<Vec<User>> {
        self.fetch_list(EntityKind::Users).await
    }

    pub async fn fetch_feature_flags(&self) -> SourceResult<Vec<FeatureFlag>> {
        self.fetch_list(EntityKind::FeatureFlags).await
    }

    pub async fn fetch_reviews(&self) -> SourceResult<Vec<Review>> {
        self.fetch_list(EntityKind::Reviews).await
    }

    /// Register a new tenant; the caller refetches the collection to pick
    /// up the backend-assigned row.
    pub async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> SourceResult<Organization> {
        self.post_json("/organizations", organization).await
    }

    /// Persist a flag's new status after an optimistic toggle.
    pub async fn set_feature_flag_status(
        &self,
        id: &str,
        status: FlagStatus,
    ) -> SourceResult<()> {
        self.put_unit(&format!("/feature-flags/{id}/status"), &FlagStatusBody { status })
            .await
    }

    /// Persist a review's reply status after an optimistic toggle.
    pub async fn set_review_reply_status(
        &self,
        id: &str,
        reply_status: ReplyStatus,
    ) -> SourceResult<()> {
        self.post_unit(
            &format!("/reviews/{id}/reply-status"),
            &ReplyStatusBody { reply_status },
        )
        .await
    }

    pub async fn fetch_settings(&self) -> SourceResult<AdminSettings> {
        self.get("/settings").await
    }

    pub async fn save_settings(&self, settings: &AdminSettings) -> SourceResult<()> {
        self.put_unit("/settings", settings).await
    }

    pub async fn fetch_dashboard_stats(&self) -> SourceResult<DashboardStats> {
        self.get("/stats/dashboard").await
    }

    pub async fn fetch_org_stats(&self) -> SourceResult<OrganizationStats> {
        self.get("/stats/organizations").await
    }

    /// Monthly usage series for the dashboard chart.
    pub async fn fetch_usage_data(&self) -> SourceResult<Vec<ChartDataPoint>> {
        self.get("/stats/usage").await
    }

    /// Per-property review score series for the dashboard chart.
    pub async fn fetch_review_data(&self) -> SourceResult<Vec<ChartDataPoint>> {
        self.get("/stats/reviews").await
    }
}
