//! HTTP client for the App Store: iTunes lookup plus the customer-reviews feed.

mod types;

use reqwest::{Client, Url};
use storepulse_core::{Platform, Review, Store, StoreSummary};

use crate::error::StoreError;
use crate::http::{build_client, join, normalise_base_url, send_for_text};
use types::{FeedEntry, FeedResponse, LookupResponse, LookupResult};

const DEFAULT_BASE_URL: &str = "https://itunes.apple.com/";

/// Client for the public iTunes endpoints.
///
/// Use [`AppleClient::new`] for production or [`AppleClient::with_base_url`]
/// to point at a mock server in tests.
pub struct AppleClient {
    client: Client,
    base_url: Url,
}

impl AppleClient {
    /// Creates a client pointed at `itunes.apple.com`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, StoreError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`StoreError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: normalise_base_url(base_url)?,
        })
    }

    /// Looks up the listing summary for `app_id` in `country`'s storefront.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NoResults`] when the lookup reports zero results.
    /// - [`StoreError::NotFound`] / [`StoreError::UnexpectedStatus`] on non-2xx.
    /// - [`StoreError::Http`] on network failure or timeout.
    /// - [`StoreError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_app_info(
        &self,
        app_id: &str,
        country: &str,
    ) -> Result<StoreSummary, StoreError> {
        let url = join(&self.base_url, "lookup")?;
        let request = self
            .client
            .get(url.clone())
            .query(&[("id", app_id), ("country", country)]);
        let body = send_for_text(request, &url).await?;

        let lookup: LookupResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
                context: format!("lookup(id={app_id}, country={country})"),
                source: e,
            })?;

        let raw = match lookup.results.into_iter().next() {
            Some(raw) if lookup.result_count > 0 => raw,
            _ => {
                return Err(StoreError::NoResults {
                    app_id: app_id.to_owned(),
                    country: country.to_owned(),
                })
            }
        };

        let result: LookupResult =
            serde_json::from_value(raw.clone()).map_err(|e| StoreError::Deserialize {
                context: format!("lookup result for {app_id}"),
                source: e,
            })?;

        Ok(StoreSummary {
            average_rating: result.average_user_rating,
            rating_count: result.user_rating_count,
            version: result.version,
            track_name: result.track_name,
            bundle_id: result.bundle_id,
            current_version_release_date: result.current_version_release_date,
            raw: Some(raw),
            ..StoreSummary::default()
        })
    }

    /// Fetches up to `max_reviews` of the most recent reviews from the first
    /// page of the customer-reviews feed.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] / [`StoreError::UnexpectedStatus`] on non-2xx.
    /// - [`StoreError::Http`] on network failure or timeout.
    /// - [`StoreError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_reviews(
        &self,
        app_id: &str,
        country: &str,
        max_reviews: usize,
    ) -> Result<Vec<Review>, StoreError> {
        let url = join(
            &self.base_url,
            &format!("rss/customerreviews/page=1/id={app_id}/sortBy=mostRecent/json"),
        )?;
        let request = self.client.get(url.clone()).query(&[("cc", country)]);
        let body = send_for_text(request, &url).await?;

        let feed: FeedResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
                context: format!("customer reviews feed for {app_id}"),
                source: e,
            })?;

        let reviews: Vec<Review> = feed
            .feed
            .entry
            .map(types::OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(entry_to_review)
            .take(max_reviews)
            .collect();

        tracing::debug!(app_id, country, count = reviews.len(), "parsed App Store reviews");
        Ok(reviews)
    }
}

/// Converts a feed entry into a [`Review`].
///
/// Entries without an `im:rating` describe the app itself rather than a
/// review and are dropped.
fn entry_to_review(entry: FeedEntry) -> Option<Review> {
    let rating_label = entry.rating?.label;

    Some(Review {
        author: entry.author.and_then(|a| a.name).map(|l| l.label),
        title: entry.title.map(|l| l.label),
        text: entry.content.map(|l| l.label),
        rating: rating_label.trim().parse::<u8>().ok(),
        updated: entry.updated.map(|l| l.label),
        platform: Platform::Ios,
        store: Store::Apple,
        clean_text: None,
        sentiment: None,
    })
}
