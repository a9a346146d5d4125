//! Per-app aggregation from a collected snapshot to dashboard metrics.

use storepulse_core::{
    AppMetrics, AppSnapshot, PlatformRating, Review, ReviewEntry, ReviewExcerpt,
    SentimentSummary, SummaryEntry,
};

use crate::drivers::detect_drivers;
use crate::normalize::clean_text;
use crate::scorer::{round3, sentiment_score, PolarityEstimator, NEUTRAL_SCORE};

/// Size of the positive and negative excerpt lists.
const EXCERPT_COUNT: usize = 3;

/// Fills in `clean_text` and `sentiment` on a review.
pub fn annotate_review<E>(review: &mut Review, estimator: &E)
where
    E: PolarityEstimator + ?Sized,
{
    let cleaned = clean_text(review.text.as_deref());
    review.sentiment = Some(sentiment_score(estimator, &cleaned));
    review.clean_text = Some(cleaned);
}

/// Scores every review of `app` and reduces them to one [`AppMetrics`].
///
/// Apple reviews come first, then Google Play. Inline error markers are
/// skipped. Platform ratings are read from the store summaries, never
/// derived from the reviews.
pub fn summarize_app<E>(app: AppSnapshot, estimator: &E) -> AppMetrics
where
    E: PolarityEstimator + ?Sized,
{
    let AppSnapshot {
        app_name,
        apple,
        google,
    } = app;

    let ios_rating = apple.summary.as_ref().and_then(SummaryEntry::average_rating);
    let android_rating = google.summary.as_ref().and_then(SummaryEntry::average_rating);

    let mut reviews: Vec<Review> = Vec::new();
    for entry in apple.reviews.into_iter().chain(google.reviews) {
        match entry {
            ReviewEntry::Review(review) => reviews.push(review),
            ReviewEntry::Failed(failure) => {
                tracing::warn!(app = %app_name, error = %failure.error, "skipping review error marker");
            }
        }
    }

    for review in &mut reviews {
        annotate_review(review, estimator);
    }

    let sentiment = summarize_reviews(&reviews);
    tracing::debug!(
        app = %app_name,
        count = reviews.len(),
        score = sentiment.score,
        "summarized reviews"
    );

    AppMetrics {
        app_name,
        ios: PlatformRating { rating: ios_rating },
        android: PlatformRating {
            rating: android_rating,
        },
        sentiment,
    }
}

fn summarize_reviews(reviews: &[Review]) -> SentimentSummary {
    let scores: Vec<f64> = reviews
        .iter()
        .map(|r| r.sentiment.unwrap_or(NEUTRAL_SCORE))
        .collect();

    let score = if scores.is_empty() {
        NEUTRAL_SCORE
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        round3(mean)
    };

    let mut ranked: Vec<usize> = (0..reviews.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let excerpt = |&i: &usize| ReviewExcerpt {
        text: reviews[i].text.clone(),
        rating: reviews[i].rating,
        platform: reviews[i].platform,
    };
    let top_positive = ranked.iter().take(EXCERPT_COUNT).map(excerpt).collect();
    let top_negative = ranked[ranked.len().saturating_sub(EXCERPT_COUNT)..]
        .iter()
        .map(excerpt)
        .collect();

    let drivers = detect_drivers(
        reviews
            .iter()
            .map(|r| r.clean_text.as_deref().unwrap_or_default()),
    );

    SentimentSummary {
        score,
        score_delta: 0.0,
        top_positive,
        top_negative,
        drivers,
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
