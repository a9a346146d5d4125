//! Collection-stage document: raw store summaries and review lists per app.
//!
//! Fetch failures are stored inline as `{"error": "..."}` objects in place of
//! a summary or as the single element of a review list, so one bad app never
//! hides the data collected for the others.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inline error marker written where a summary or review would be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub error: String,
}

impl FetchFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "Android"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Store {
    Apple,
    GooglePlay,
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Store::Apple => write!(f, "apple"),
            Store::GooglePlay => write!(f, "google_play"),
        }
    }
}

/// Store-reported aggregate rating data for one app.
///
/// The common fields are filled by both stores; the rest are store-specific
/// and omitted from the JSON when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub average_rating: Option<f64>,
    pub rating_count: Option<u64>,
    pub version: Option<String>,

    // App Store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version_release_date: Option<String>,

    // Google Play
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installs: Option<String>,

    /// The source record the fields above were read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryEntry {
    Failed(FetchFailure),
    Found(StoreSummary),
}

impl SummaryEntry {
    /// Rating average, or `None` for an error marker or a summary without one.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        match self {
            SummaryEntry::Found(summary) => summary.average_rating,
            SummaryEntry::Failed(_) => None,
        }
    }
}

/// A single user review as returned by a store.
///
/// `clean_text` and `sentiment` are filled in once during summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<u8>,
    pub updated: Option<String>,
    pub platform: Platform,
    pub store: Store,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewEntry {
    Failed(FetchFailure),
    Review(Review),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppleSnapshot {
    pub app_id: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub summary: Option<SummaryEntry>,
    #[serde(default)]
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GooglePlaySnapshot {
    pub package: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub summary: Option<SummaryEntry>,
    #[serde(default)]
    pub reviews: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub app_name: String,
    #[serde(default)]
    pub apple: AppleSnapshot,
    #[serde(default)]
    pub google: GooglePlaySnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_utc: DateTime<Utc>,
    pub apps: Vec<AppSnapshot>,
}
