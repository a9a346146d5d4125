//! Request/response codec for the Play Store `UsvDTd` reviews RPC.
//!
//! Reviews are served by the `batchexecute` endpoint. The request is a
//! form-encoded `f.req` holding a JSON array whose RPC argument is itself a
//! JSON-encoded string; the response is prefixed with `)]}'` and nests the
//! payload the same way.

use chrono::DateTime;
use serde_json::{json, Value};
use storepulse_core::{Platform, Review, Store};

use super::details::nested;
use crate::error::StoreError;

const RPC_ID: &str = "UsvDTd";
const SORT_NEWEST: u8 = 2;
const XSSI_PREFIX: &str = ")]}'";

/// One page of reviews and the token for the next page, if any.
#[derive(Debug, Default)]
pub(crate) struct ReviewsPage {
    pub(crate) reviews: Vec<Review>,
    pub(crate) token: Option<String>,
}

/// Builds the `f.req` form value for one page of newest-first reviews.
pub(crate) fn build_reviews_request(package: &str, count: usize, token: Option<&str>) -> String {
    let args = json!([
        null,
        null,
        [2, SORT_NEWEST, [count, null, token], null, []],
        [package, 7]
    ]);
    json!([[[RPC_ID, args.to_string(), null, "generic"]]]).to_string()
}

/// Parses a `batchexecute` response body into a [`ReviewsPage`].
///
/// A response whose RPC payload is `null` (no reviews for this locale)
/// yields an empty page with no token.
///
/// # Errors
///
/// Returns [`StoreError::Deserialize`] if the envelope or the embedded
/// payload is not valid JSON.
pub(crate) fn parse_reviews_response(body: &str, package: &str) -> Result<ReviewsPage, StoreError> {
    let trimmed = body.trim_start();
    let json_part = trimmed.strip_prefix(XSSI_PREFIX).unwrap_or(trimmed);

    // Only the first JSON value matters; anything after it is framing.
    let envelope = serde_json::Deserializer::from_str(json_part)
        .into_iter::<Value>()
        .next()
        .unwrap_or(Ok(Value::Null))
        .map_err(|e| StoreError::Deserialize {
            context: format!("reviews envelope for {package}"),
            source: e,
        })?;

    let Some(payload) = nested(&envelope, &[0, 2]).and_then(Value::as_str) else {
        return Ok(ReviewsPage::default());
    };

    let data: Value = serde_json::from_str(payload).map_err(|e| StoreError::Deserialize {
        context: format!("reviews payload for {package}"),
        source: e,
    })?;

    let reviews = data
        .get(0)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_review_item).collect())
        .unwrap_or_default();

    Ok(ReviewsPage {
        reviews,
        token: next_page_token(&data),
    })
}

/// The continuation token sits at `data[-2][-1]`.
fn next_page_token(data: &Value) -> Option<String> {
    let outer = data.as_array()?;
    let cursor = outer.get(outer.len().checked_sub(2)?)?.as_array()?;
    cursor.last()?.as_str().map(str::to_owned)
}

/// Maps one positional review record to a [`Review`].
///
/// The app version the review was written against doubles as its title.
fn parse_review_item(item: &Value) -> Option<Review> {
    item.as_array()?;

    let text_at = |path: &[usize]| nested(item, path).and_then(Value::as_str).map(str::to_owned);

    let updated = nested(item, &[5, 0])
        .and_then(Value::as_i64)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|at| at.to_rfc3339());

    Some(Review {
        author: text_at(&[1, 0]),
        title: Some(text_at(&[10]).unwrap_or_default()),
        text: text_at(&[4]),
        rating: nested(item, &[2])
            .and_then(Value::as_u64)
            .and_then(|r| u8::try_from(r).ok()),
        updated,
        platform: Platform::Android,
        store: Store::GooglePlay,
        clean_text: None,
        sentiment: None,
    })
}
