use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Sentiment assigned to a review by the analysis pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Negative" => Ok(Sentiment::Negative),
            "Neutral" => Ok(Sentiment::Neutral),
            _ => Err(anyhow::anyhow!("Invalid sentiment: {}", s)),
        }
    }
}

/// Whether an operator reply has been posted for a review
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReplyStatus {
    Pending,
    Replied,
}

impl ReplyStatus {
    pub fn flipped(&self) -> Self {
        match self {
            ReplyStatus::Pending => ReplyStatus::Replied,
            ReplyStatus::Replied => ReplyStatus::Pending,
        }
    }
}

impl Display for ReplyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ReplyStatus::Pending => write!(f, "Pending"),
            ReplyStatus::Replied => write!(f, "Replied"),
        }
    }
}

impl FromStr for ReplyStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ReplyStatus::Pending),
            "Replied" => Ok(ReplyStatus::Replied),
            _ => Err(anyhow::anyhow!("Invalid reply status: {}", s)),
        }
    }
}

/// Customer review entity as scraped from a booking platform.
///
/// Reviewer name and text are optional on the wire; the detail overlay
/// substitutes display fallbacks rather than storing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub categories: Vec<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub reply_status: ReplyStatus,
}

impl Review {
    /// Reviewer name with the "Anonymous" fallback.
    pub fn display_name(&self) -> &str {
        self.reviewer_name.as_deref().unwrap_or("Anonymous")
    }

    /// Review text with the placeholder fallback.
    pub fn display_text(&self) -> &str {
        self.text.as_deref().unwrap_or("No review text available")
    }

    /// Rating clamped to [0, 5] and rounded to the nearest whole star.
    pub fn star_rating(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).round() as u8
    }

    /// Five-glyph star row, e.g. "★★★★☆" for a rating of 4.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.star_rating());
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// Human-readable review date, "N/A" when the platform gave none.
    pub fn date_label(&self) -> String {
        match self.date {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => "N/A".to_string(),
        }
    }
}
