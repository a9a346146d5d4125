//! HTTP client for Google Play: the listing details page and the paginated
//! `batchexecute` reviews RPC.

mod details;
mod reviews;

use std::time::Duration;

use reqwest::{Client, Url};
use storepulse_core::{Review, StoreSummary};

use crate::error::StoreError;
use crate::http::{build_client, join, normalise_base_url, send_for_text};
use details::parse_app_details;
use reviews::{build_reviews_request, parse_reviews_response};

const DEFAULT_BASE_URL: &str = "https://play.google.com/";

/// Largest page the reviews RPC serves.
const PAGE_SIZE: usize = 100;

/// Upper bound on review pages per app. Stops a token that never runs out;
/// whatever was fetched before the limit is kept.
const MAX_PAGES: usize = 50;

pub struct GooglePlayClient {
    client: Client,
    base_url: Url,
    /// Sleep between review pages.
    page_delay: Duration,
}

impl GooglePlayClient {
    /// Creates a client pointed at `play.google.com`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, page_delay_ms: u64) -> Result<Self, StoreError> {
        Self::with_base_url(timeout_secs, user_agent, page_delay_ms, DEFAULT_BASE_URL)
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
        page_delay_ms: u64,
        base_url: &str,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: normalise_base_url(base_url)?,
            page_delay: Duration::from_millis(page_delay_ms),
        })
    }

    /// Fetches the listing summary for `package` in the given locale.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when the package is not listed (HTTP 404).
    /// - [`StoreError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`StoreError::Http`] on network failure or timeout.
    /// - [`StoreError::Parse`] if the page carries no listing data.
    pub async fn fetch_app_info(
        &self,
        package: &str,
        lang: &str,
        country: &str,
    ) -> Result<StoreSummary, StoreError> {
        let url = join(&self.base_url, "store/apps/details")?;
        let request = self
            .client
            .get(url.clone())
            .query(&[("id", package), ("hl", lang), ("gl", country)]);
        let html = send_for_text(request, &url).await?;
        parse_app_details(&html, package)
    }

    /// Fetches up to `max_reviews` of the newest reviews, following the
    /// continuation token page by page.
    ///
    /// Stops when `max_reviews` is reached, the response carries no token, a
    /// page comes back empty, or [`MAX_PAGES`] pages have been read. Sleeps
    /// `page_delay` between pages.
    ///
    /// # Errors
    ///
    /// Propagates any error from a page request. Hitting [`MAX_PAGES`] is not
    /// an error: the reviews collected up to then are returned.
    pub async fn fetch_reviews(
        &self,
        package: &str,
        lang: &str,
        country: &str,
        max_reviews: usize,
    ) -> Result<Vec<Review>, StoreError> {
        let mut collected: Vec<Review> = Vec::new();
        let mut token: Option<String> = None;
        let mut page_count = 0usize;

        while collected.len() < max_reviews {
            if page_count == MAX_PAGES {
                tracing::warn!(
                    package,
                    max_pages = MAX_PAGES,
                    total = collected.len(),
                    "page limit reached, keeping reviews fetched so far"
                );
                break;
            }
            page_count += 1;

            let count = (max_reviews - collected.len()).min(PAGE_SIZE);
            let page = self
                .fetch_reviews_page(package, lang, country, count, token.as_deref())
                .await?;

            let fetched = page.reviews.len();
            collected.extend(page.reviews);
            tracing::debug!(
                package,
                page = page_count,
                fetched,
                total = collected.len(),
                "fetched Google Play reviews page"
            );

            token = page.token;
            if fetched == 0 || token.is_none() || collected.len() >= max_reviews {
                break;
            }

            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        collected.truncate(max_reviews);
        Ok(collected)
    }

    async fn fetch_reviews_page(
        &self,
        package: &str,
        lang: &str,
        country: &str,
        count: usize,
        token: Option<&str>,
    ) -> Result<reviews::ReviewsPage, StoreError> {
        let url = join(&self.base_url, "_/PlayStoreUi/data/batchexecute")?;
        let f_req = build_reviews_request(package, count, token);
        let request = self
            .client
            .post(url.clone())
            .query(&[("hl", lang), ("gl", country)])
            .form(&[("f.req", f_req.as_str())]);
        let body = send_for_text(request, &url).await?;
        parse_reviews_response(&body, package)
    }
}
