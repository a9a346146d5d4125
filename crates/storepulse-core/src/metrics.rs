//! Summarization-stage document consumed by the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Worsening,
    Steady,
}

/// A tracked keyword and how often it shows up in an app's reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub label: String,
    pub trend: Trend,
    /// Number of reviews mentioning the keyword.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewExcerpt {
    pub text: Option<String>,
    pub rating: Option<u8>,
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    pub score: f64,
    pub score_delta: f64,
    pub top_positive: Vec<ReviewExcerpt>,
    pub top_negative: Vec<ReviewExcerpt>,
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformRating {
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetrics {
    pub app_name: String,
    pub ios: PlatformRating,
    pub android: PlatformRating,
    pub sentiment: SentimentSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    pub generated_utc: DateTime<Utc>,
    pub apps: Vec<AppMetrics>,
}
