//! Seed datasets shaped like the staging backend's responses.

use chrono::{TimeZone, Utc};
use opsdeck_core::models::{
    FeatureFlag, FlagStatus, Organization, OrgStatus, ReplyStatus, Review, Sentiment, User,
    UserRole, UserStatus,
};

pub fn seed_organizations() -> Vec<Organization> {
    let rows = [
        ("1", "Acme Corporation", "acme.com", 1247, OrgStatus::Active),
        ("2", "TechStart Inc", "techstart.io", 892, OrgStatus::Active),
        ("3", "Global Enterprises", "globalent.com", 2156, OrgStatus::Active),
        ("4", "Innovate Labs", "innovatelabs.co", 445, OrgStatus::Pending),
        ("5", "Digital Solutions", "digitalsol.net", 678, OrgStatus::Active),
        ("6", "Smart Systems", "smartsys.com", 234, OrgStatus::Inactive),
        ("7", "Future Tech", "futuretech.io", 1523, OrgStatus::Active),
        ("8", "CloudBase Ltd", "cloudbase.co", 967, OrgStatus::Active),
    ];
    rows.into_iter()
        .map(|(id, name, domain, users_count, status)| Organization {
            id: id.to_string(),
            name: name.to_string(),
            domain: domain.to_string(),
            users_count,
            status,
        })
        .collect()
}

pub fn seed_users() -> Vec<User> {
    let rows = [
        ("1", "Sarah Johnson", UserRole::Admin, UserStatus::Active),
        ("2", "Michael Chen", UserRole::Manager, UserStatus::Active),
        ("3", "Emily Rodriguez", UserRole::User, UserStatus::Active),
        ("4", "David Kim", UserRole::User, UserStatus::Suspended),
        ("5", "Jessica Taylor", UserRole::Manager, UserStatus::Active),
        ("6", "Robert Anderson", UserRole::User, UserStatus::Active),
        ("7", "Maria Garcia", UserRole::Admin, UserStatus::Active),
        ("8", "James Wilson", UserRole::User, UserStatus::Suspended),
    ];
    rows.into_iter()
        .map(|(id, name, role, status)| User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!(
                "{}@company.com",
                name.to_lowercase().replace(' ', ".")
            ),
            role,
            status,
            avatar_color: Some("#bfdbfe".to_string()),
        })
        .collect()
}

pub fn seed_feature_flags() -> Vec<FeatureFlag> {
    let rows = [
        ("1", "Advanced Analytics Dashboard", "analytics_dashboard_v2", FlagStatus::Enabled),
        ("2", "AI-Powered Recommendations", "ai_recommendations", FlagStatus::Enabled),
        ("3", "Dark Mode", "dark_mode_support", FlagStatus::Disabled),
        ("4", "Multi-Language Support", "i18n_support", FlagStatus::Enabled),
        ("5", "Real-time Collaboration", "realtime_collab", FlagStatus::Disabled),
        ("6", "Advanced Search Filters", "advanced_search", FlagStatus::Enabled),
        ("7", "Mobile App Integration", "mobile_integration", FlagStatus::Disabled),
        ("8", "Two-Factor Authentication", "2fa_required", FlagStatus::Enabled),
        ("9", "Export to PDF", "pdf_export", FlagStatus::Enabled),
        ("10", "Beta Features Access", "beta_features", FlagStatus::Disabled),
        ("11", "Custom Branding", "custom_branding", FlagStatus::Enabled),
        ("12", "API Rate Limiting", "api_rate_limiting", FlagStatus::Disabled),
    ];
    rows.into_iter()
        .map(|(id, name, key, status)| FeatureFlag {
            id: id.to_string(),
            key: key.to_string(),
            name: name.to_string(),
            description: format!("{name} rollout control"),
            status,
        })
        .collect()
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".to_string(),
            rating: 4.5,
            reviewer_name: Some("Alice Morgan".to_string()),
            text: Some("Great stay, spotless rooms and friendly staff.".to_string()),
            sentiment: Sentiment::Positive,
            categories: vec!["Cleanliness".to_string(), "Service".to_string()],
            source: "Booking.com".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).single(),
            reply_status: ReplyStatus::Pending,
        },
        Review {
            id: "r2".to_string(),
            rating: 2.0,
            reviewer_name: None,
            text: Some("Room service took over an hour.".to_string()),
            sentiment: Sentiment::Negative,
            categories: vec!["Service".to_string()],
            source: "Google".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 10, 18, 5, 0).single(),
            reply_status: ReplyStatus::Replied,
        },
        Review {
            id: "r3".to_string(),
            rating: 3.0,
            reviewer_name: Some("Ben Carter".to_string()),
            text: None,
            sentiment: Sentiment::Neutral,
            categories: Vec::new(),
            source: "TripAdvisor".to_string(),
            date: None,
            reply_status: ReplyStatus::Pending,
        },
    ]
}
