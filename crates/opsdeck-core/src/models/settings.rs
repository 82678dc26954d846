use serde::{Deserialize, Serialize};

/// Platform settings form model.
///
/// The dashboard edits a local copy and submits the whole document through
/// the write-back endpoint; there is no field-level patching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub platform_name: String,
    pub timezone: String,
    pub language: String,
    pub date_format: String,
    pub currency: String,
    pub maintenance_mode: bool,
    pub two_factor_auth: bool,
    pub password_strength: String,
    pub session_timeout: String,
    pub allow_new_signups: bool,
    pub notify_new_reviews: bool,
    pub notify_low_rating: bool,
    pub notify_weekly_digest: bool,
    pub notify_ai_reply: bool,
    pub notify_system_alerts: bool,
    pub notify_feature_updates: bool,
}
