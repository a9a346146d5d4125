//! Response shapes for the iTunes lookup API and the customer-reviews RSS feed.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(rename = "resultCount", default)]
    pub(crate) result_count: u64,
    #[serde(default)]
    pub(crate) results: Vec<serde_json::Value>,
}

/// The subset of a lookup result that lands in the summary.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupResult {
    pub(crate) average_user_rating: Option<f64>,
    pub(crate) user_rating_count: Option<u64>,
    pub(crate) version: Option<String>,
    pub(crate) current_version_release_date: Option<String>,
    pub(crate) track_name: Option<String>,
    pub(crate) bundle_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedResponse {
    pub(crate) feed: Feed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Feed {
    #[serde(default)]
    pub(crate) entry: Option<OneOrMany<FeedEntry>>,
}

/// The feed collapses a one-entry list into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedEntry {
    pub(crate) author: Option<FeedAuthor>,
    pub(crate) title: Option<Label>,
    pub(crate) content: Option<Label>,
    #[serde(rename = "im:rating")]
    pub(crate) rating: Option<Label>,
    pub(crate) updated: Option<Label>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedAuthor {
    pub(crate) name: Option<Label>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Label {
    #[serde(default)]
    pub(crate) label: String,
}
