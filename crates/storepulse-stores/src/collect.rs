//! Fetcher boundary: turns client results into snapshot sections.
//!
//! Nothing here returns an error. A failed summary becomes a
//! [`SummaryEntry::Failed`] and a failed review fetch becomes a one-element
//! review list holding the marker.

use storepulse_core::{
    AppleConfig, AppleSnapshot, FetchFailure, GooglePlayConfig, GooglePlaySnapshot, Review,
    ReviewEntry, StoreSummary, SummaryEntry,
};

use crate::apple::AppleClient;
use crate::error::StoreError;
use crate::google_play::GooglePlayClient;

const APPLE_APP_FAILED: &str = "apple_app_fetch_failed";
const APPLE_REVIEWS_FAILED: &str = "apple_reviews_fetch_failed";
const GOOGLE_APP_FAILED: &str = "google_app_fetch_failed";
const GOOGLE_REVIEWS_FAILED: &str = "google_reviews_fetch_failed";

/// Collects the App Store section for one app.
///
/// `None` config means the app is not published there: the section keeps
/// null identifiers, a null summary and no reviews.
pub async fn collect_apple(
    client: &AppleClient,
    app_name: &str,
    config: Option<&AppleConfig>,
    max_reviews: usize,
) -> AppleSnapshot {
    let Some(config) = config else {
        return AppleSnapshot::default();
    };

    let summary = capture_summary(
        client.fetch_app_info(&config.app_id, &config.country).await,
        app_name,
        APPLE_APP_FAILED,
    );
    let reviews = capture_reviews(
        client
            .fetch_reviews(&config.app_id, &config.country, max_reviews)
            .await,
        app_name,
        APPLE_REVIEWS_FAILED,
    );

    AppleSnapshot {
        app_id: Some(config.app_id.clone()),
        country: Some(config.country.clone()),
        summary: Some(summary),
        reviews,
    }
}

/// Collects the Google Play section for one app.
pub async fn collect_google_play(
    client: &GooglePlayClient,
    app_name: &str,
    config: Option<&GooglePlayConfig>,
    max_reviews: usize,
) -> GooglePlaySnapshot {
    let Some(config) = config else {
        return GooglePlaySnapshot::default();
    };

    let summary = capture_summary(
        client
            .fetch_app_info(&config.package, &config.lang, &config.country)
            .await,
        app_name,
        GOOGLE_APP_FAILED,
    );
    let reviews = capture_reviews(
        client
            .fetch_reviews(&config.package, &config.lang, &config.country, max_reviews)
            .await,
        app_name,
        GOOGLE_REVIEWS_FAILED,
    );

    GooglePlaySnapshot {
        package: Some(config.package.clone()),
        country: Some(config.country.clone()),
        summary: Some(summary),
        reviews,
    }
}

/// Zero lookup results keep their own message; every other failure is
/// prefixed with the fetch that produced it.
fn failure_message(err: &StoreError, context: &str) -> String {
    match err {
        StoreError::NoResults { .. } => err.to_string(),
        _ => format!("{context}: {err}"),
    }
}

pub(crate) fn capture_summary(
    result: Result<StoreSummary, StoreError>,
    app_name: &str,
    context: &str,
) -> SummaryEntry {
    match result {
        Ok(summary) => SummaryEntry::Found(summary),
        Err(e) => {
            tracing::warn!(app = app_name, source = context, error = %e, "summary fetch failed");
            SummaryEntry::Failed(FetchFailure::new(failure_message(&e, context)))
        }
    }
}

pub(crate) fn capture_reviews(
    result: Result<Vec<Review>, StoreError>,
    app_name: &str,
    context: &str,
) -> Vec<ReviewEntry> {
    match result {
        Ok(reviews) => {
            tracing::debug!(app = app_name, source = context, count = reviews.len(), "collected reviews");
            reviews.into_iter().map(ReviewEntry::Review).collect()
        }
        Err(e) => {
            tracing::warn!(app = app_name, source = context, error = %e, "review fetch failed");
            vec![ReviewEntry::Failed(FetchFailure::new(failure_message(&e, context)))]
        }
    }
}
