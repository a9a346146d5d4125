//! Listing summary extraction from the Google Play details page.
//!
//! The page ships its data as `AF_initDataCallback({key: 'ds:N', ..., data: [...],
//! sideChannel: {}});` script blocks. The listing lives in `ds:5`, addressed by
//! fixed positions inside nested arrays.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use storepulse_core::StoreSummary;

use crate::error::StoreError;

static DATASET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)AF_initDataCallback\(\{key:\s*'(ds:\d+)'.*?data:(.*?), sideChannel:\s*\{\}\}\);")
        .expect("valid regex")
});

const LISTING_DATASET: &str = "ds:5";

const TITLE: &[usize] = &[0, 0];
const SCORE: &[usize] = &[51, 0, 1];
const RATINGS: &[usize] = &[51, 2, 1];
const INSTALLS: &[usize] = &[13, 0];
const DEVELOPER: &[usize] = &[68, 0];
const VERSION: &[usize] = &[140, 0, 0, 0];

/// Walks `path` through nested JSON arrays.
pub(crate) fn nested<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, &idx| node.get(idx))
}

/// Collects every `AF_initDataCallback` dataset on the page, keyed by `ds:N`.
///
/// Blocks whose payload is not valid JSON are skipped.
fn extract_datasets(html: &str) -> HashMap<String, Value> {
    DATASET_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().to_owned();
            let data = serde_json::from_str::<Value>(caps.get(2)?.as_str()).ok()?;
            Some((key, data))
        })
        .collect()
}

/// Parses the listing summary out of a details page.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] if the page carries no listing dataset.
pub(crate) fn parse_app_details(html: &str, package: &str) -> Result<StoreSummary, StoreError> {
    let datasets = extract_datasets(html);
    let listing = datasets
        .get(LISTING_DATASET)
        .and_then(|ds| nested(ds, &[1, 2]))
        .ok_or_else(|| StoreError::Parse {
            context: format!("details page for {package}"),
            reason: format!("{LISTING_DATASET} listing dataset not found"),
        })?;

    let string_at = |path: &[usize]| nested(listing, path).and_then(Value::as_str).map(str::to_owned);

    Ok(StoreSummary {
        average_rating: nested(listing, SCORE).and_then(Value::as_f64),
        rating_count: nested(listing, RATINGS).and_then(Value::as_u64),
        version: string_at(VERSION),
        title: string_at(TITLE),
        developer: string_at(DEVELOPER),
        installs: string_at(INSTALLS),
        raw: Some(listing.clone()),
        ..StoreSummary::default()
    })
}
