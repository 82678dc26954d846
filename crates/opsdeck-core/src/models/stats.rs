use serde::{Deserialize, Serialize};

/// Dashboard landing page headline figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_organizations: u64,
    pub organizations_growth: f64,
    pub total_users: u64,
    pub users_growth: f64,
    pub active_hotels: u64,
    pub hotels_growth: f64,
}

/// Headline counts above the organizations table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganizationStats {
    pub total: u64,
    pub active: u64,
    pub pending: u64,
}

/// One labeled value of a usage or review chart series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
}
