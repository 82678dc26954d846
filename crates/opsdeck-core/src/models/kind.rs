use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// The four entity collections the dashboard browses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Organizations,
    Users,
    FeatureFlags,
    Reviews,
}

impl EntityKind {
    /// URL path segment for the collection endpoint (`GET /{segment}`).
    pub fn path_segment(&self) -> &'static str {
        match self {
            EntityKind::Organizations => "organizations",
            EntityKind::Users => "users",
            EntityKind::FeatureFlags => "feature-flags",
            EntityKind::Reviews => "reviews",
        }
    }

    /// JSON envelope key wrapping the collection array.
    pub fn envelope_key(&self) -> &'static str {
        match self {
            EntityKind::Organizations => "organizations",
            EntityKind::Users => "users",
            EntityKind::FeatureFlags => "featureFlags",
            EntityKind::Reviews => "reviews",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.path_segment())
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organizations" => Ok(EntityKind::Organizations),
            "users" => Ok(EntityKind::Users),
            "feature-flags" | "featureflags" => Ok(EntityKind::FeatureFlags),
            "reviews" => Ok(EntityKind::Reviews),
            _ => Err(anyhow::anyhow!("Invalid entity kind: {}", s)),
        }
    }
}
