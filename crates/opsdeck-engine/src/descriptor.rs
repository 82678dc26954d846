//! Query capability descriptors
//!
//! The four entity kinds share one generic query engine but differ in which
//! fields search scans and which selectors can filter them. [`Queryable`]
//! captures exactly that difference, so pagination and predicate logic exist
//! once. [`Toggleable`] marks the kinds that carry a two-state moderation
//! field.

use opsdeck_core::models::{FeatureFlag, Organization, Review, User};

/// Capability descriptor every listable entity kind implements.
pub trait Queryable: Send + Sync + 'static {
    /// Stable unique id, the only identity the engine relies on.
    fn id(&self) -> &str;

    /// Fields scanned by free-text search, in display order.
    fn search_haystacks(&self) -> Vec<&str>;

    /// Value of the field addressed by a filter selector key, or `None` if
    /// this kind has no such selector.
    fn filter_field(&self, key: &str) -> Option<String>;
}

/// Entity kinds with a two-state field the moderation UI flips.
pub trait Toggleable: Clone {
    /// A copy of the entity with the toggle field flipped.
    fn toggled(&self) -> Self;
}

impl Queryable for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn filter_field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl Queryable for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_field(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role.to_string()),
            _ => None,
        }
    }
}

impl Queryable for FeatureFlag {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.key]
    }

    // Flags are searched, never filtered by selector.
    fn filter_field(&self, _key: &str) -> Option<String> {
        None
    }
}

impl Queryable for Review {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut haystacks = Vec::with_capacity(2);
        if let Some(name) = self.reviewer_name.as_deref() {
            haystacks.push(name);
        }
        if let Some(text) = self.text.as_deref() {
            haystacks.push(text);
        }
        haystacks
    }

    fn filter_field(&self, key: &str) -> Option<String> {
        match key {
            "sentiment" => Some(self.sentiment.to_string()),
            "source" => Some(self.source.clone()),
            _ => None,
        }
    }
}

impl Toggleable for FeatureFlag {
    fn toggled(&self) -> Self {
        Self {
            status: self.status.flipped(),
            ..self.clone()
        }
    }
}

impl Toggleable for Review {
    fn toggled(&self) -> Self {
        Self {
            reply_status: self.reply_status.flipped(),
            ..self.clone()
        }
    }
}

impl Toggleable for User {
    fn toggled(&self) -> Self {
        use opsdeck_core::models::UserStatus;

        Self {
            status: match self.status {
                UserStatus::Active => UserStatus::Suspended,
                UserStatus::Suspended => UserStatus::Active,
            },
            ..self.clone()
        }
    }
}
