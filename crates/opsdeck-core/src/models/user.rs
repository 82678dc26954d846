use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Platform user role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Manager => write!(f, "Manager"),
            UserRole::User => write!(f, "User"),
        }
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(UserRole::Admin),
            "Manager" => Ok(UserRole::Manager),
            "User" => Ok(UserRole::User),
            _ => Err(anyhow::anyhow!("Invalid user role: {}", s)),
        }
    }
}

/// User account status. Suspended accounts keep their data but cannot sign in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Suspended,
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

impl FromStr for UserStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserStatus::Active),
            "Suspended" => Ok(UserStatus::Suspended),
            _ => Err(anyhow::anyhow!("Invalid user status: {}", s)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

impl User {
    /// Up to two initials for the avatar placeholder, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@company.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            avatar_color: Some("#bfdbfe".to_string()),
        }
    }

    #[test]
    fn test_initials_two_words() {
        assert_eq!(sample_user().initials(), "SJ");
    }

    #[test]
    fn test_initials_single_word() {
        let mut user = sample_user();
        user.name = "Cher".to_string();
        assert_eq!(user.initials(), "C");
    }

    #[test]
    fn test_initials_three_words_capped_at_two() {
        let mut user = sample_user();
        user.name = "Mary Jane Watson".to_string();
        assert_eq!(user.initials(), "MJ");
    }

    #[test]
    fn test_missing_avatar_color_deserializes() {
        let json = r#"{
            "id": "4",
            "name": "David Kim",
            "email": "david.kim@company.com",
            "role": "User",
            "status": "Suspended"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.status, UserStatus::Suspended);
        assert_eq!(user.avatar_color, None);
    }
}
