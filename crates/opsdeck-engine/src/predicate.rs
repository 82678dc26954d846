//! Normalization & predicate layer
//!
//! Turns raw search text and selector values into one composable predicate
//! over a single entity. Pure and referentially transparent: the same
//! (search, filters, entity) triple always yields the same boolean.

use std::collections::BTreeMap;

use crate::descriptor::Queryable;

/// One filter selector's current choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// The "All Status" / "All Roles" sentinel: matches every entity.
    Any,
    /// Requires exact equality with the entity's corresponding field.
    Is(String),
}

impl FilterValue {
    pub fn is_any(&self) -> bool {
        matches!(self, FilterValue::Any)
    }
}

/// Active filter selectors keyed by stable selector name
/// ("status", "role", "sentiment", "source").
pub type FilterMap = BTreeMap<String, FilterValue>;

/// Case-folding shared by the query and every searched field.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Composed search + filter predicate over one entity kind.
#[derive(Debug, Clone)]
pub struct Predicate {
    needle: String,
    /// Only the non-sentinel selectors survive composition.
    required: Vec<(String, String)>,
}

impl Predicate {
    pub fn new(search: &str, filters: &FilterMap) -> Self {
        let required = filters
            .iter()
            .filter_map(|(key, value)| match value {
                FilterValue::Any => None,
                FilterValue::Is(v) => Some((key.clone(), v.clone())),
            })
            .collect();

        Self {
            needle: fold(search.trim()),
            required,
        }
    }

    /// A predicate that matches everything (default query state).
    pub fn match_all() -> Self {
        Self {
            needle: String::new(),
            required: Vec::new(),
        }
    }

    /// Logical AND of the search branch and every active filter branch,
    /// short-circuiting on the first false.
    pub fn matches<E: Queryable>(&self, entity: &E) -> bool {
        self.matches_search(entity) && self.matches_filters(entity)
    }

    fn matches_search<E: Queryable>(&self, entity: &E) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        entity
            .search_haystacks()
            .iter()
            .any(|haystack| fold(haystack).contains(&self.needle))
    }

    fn matches_filters<E: Queryable>(&self, entity: &E) -> bool {
        self.required.iter().all(|(key, expected)| {
            entity
                .filter_field(key)
                .is_some_and(|actual| actual == *expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_core::models::{Organization, OrgStatus, User, UserRole, UserStatus};

    fn org(name: &str, status: OrgStatus) -> Organization {
        Organization {
            id: "1".to_string(),
            name: name.to_string(),
            domain: "example.com".to_string(),
            users_count: 10,
            status,
        }
    }

    fn user(name: &str, email: &str, role: UserRole) -> User {
        User {
            id: "1".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status: UserStatus::Active,
            avatar_color: None,
        }
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let predicate = Predicate::new("", &FilterMap::new());
        assert!(predicate.matches(&org("Acme", OrgStatus::Active)));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let predicate = Predicate::new("ACME", &FilterMap::new());
        assert!(predicate.matches(&org("acme corporation", OrgStatus::Active)));
        assert!(!predicate.matches(&org("Globex", OrgStatus::Active)));
    }

    #[test]
    fn test_search_scans_all_designated_fields() {
        let predicate = Predicate::new("chen", &FilterMap::new());
        // Name miss, email hit.
        assert!(predicate.matches(&user(
            "Michael C.",
            "michael.chen@company.com",
            UserRole::Manager
        )));
    }

    #[test]
    fn test_sentinel_filter_always_matches() {
        let mut filters = FilterMap::new();
        filters.insert("status".to_string(), FilterValue::Any);
        let predicate = Predicate::new("", &filters);
        assert!(predicate.matches(&org("Acme", OrgStatus::Inactive)));
    }

    #[test]
    fn test_filter_requires_exact_equality() {
        let mut filters = FilterMap::new();
        filters.insert(
            "status".to_string(),
            FilterValue::Is("Pending".to_string()),
        );
        let predicate = Predicate::new("", &filters);
        assert!(predicate.matches(&org("Innovate Labs", OrgStatus::Pending)));
        assert!(!predicate.matches(&org("Acme", OrgStatus::Active)));
    }

    #[test]
    fn test_search_and_filters_compose_with_and() {
        let mut filters = FilterMap::new();
        filters.insert("role".to_string(), FilterValue::Is("Admin".to_string()));
        let predicate = Predicate::new("garcia", &filters);

        assert!(predicate.matches(&user(
            "Maria Garcia",
            "maria.garcia@company.com",
            UserRole::Admin
        )));
        // Search hit, filter miss.
        assert!(!predicate.matches(&user(
            "Maria Garcia",
            "maria.garcia@company.com",
            UserRole::User
        )));
    }

    #[test]
    fn test_unknown_filter_key_matches_nothing() {
        let mut filters = FilterMap::new();
        filters.insert(
            "flavor".to_string(),
            FilterValue::Is("vanilla".to_string()),
        );
        let predicate = Predicate::new("", &filters);
        assert!(!predicate.matches(&org("Acme", OrgStatus::Active)));
    }

    #[test]
    fn test_predicate_is_idempotent() {
        let mut filters = FilterMap::new();
        filters.insert("status".to_string(), FilterValue::Is("Active".to_string()));
        let predicate = Predicate::new("acme", &filters);
        let entity = org("Acme Corporation", OrgStatus::Active);

        let first = predicate.matches(&entity);
        let second = predicate.matches(&entity);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_search_text_is_trimmed() {
        let predicate = Predicate::new("  acme  ", &FilterMap::new());
        assert!(predicate.matches(&org("Acme Corporation", OrgStatus::Active)));
    }
}
