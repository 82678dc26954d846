use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Feature flag rollout state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlagStatus {
    Enabled,
    Disabled,
}

impl FlagStatus {
    /// The opposite rollout state.
    pub fn flipped(&self) -> Self {
        match self {
            FlagStatus::Enabled => FlagStatus::Disabled,
            FlagStatus::Disabled => FlagStatus::Enabled,
        }
    }
}

impl Display for FlagStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FlagStatus::Enabled => write!(f, "Enabled"),
            FlagStatus::Disabled => write!(f, "Disabled"),
        }
    }
}

impl FromStr for FlagStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enabled" => Ok(FlagStatus::Enabled),
            "Disabled" => Ok(FlagStatus::Disabled),
            _ => Err(anyhow::anyhow!("Invalid flag status: {}", s)),
        }
    }
}

/// Feature flag entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub id: String,
    /// Stable machine key, e.g. "dark_mode_support"
    pub key: String,
    pub name: String,
    pub description: String,
    pub status: FlagStatus,
}
