use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Organization lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrgStatus {
    Active,
    Pending,
    Inactive,
}

impl Display for OrgStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            OrgStatus::Active => write!(f, "Active"),
            OrgStatus::Pending => write!(f, "Pending"),
            OrgStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for OrgStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(OrgStatus::Active),
            "Pending" => Ok(OrgStatus::Pending),
            "Inactive" => Ok(OrgStatus::Inactive),
            _ => Err(anyhow::anyhow!("Invalid organization status: {}", s)),
        }
    }
}

/// Organization entity (a tenant of the platform)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub users_count: u64,
    pub status: OrgStatus,
}
