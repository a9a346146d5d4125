use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use storepulse_sentiment::{clean_text, sentiment_score};

use super::*;

const APPLE_REVIEWS: [(u8, &str); 4] = [
    (5, "Love the shows, great quality"),
    (1, "Keeps crashing, terrible app"),
    (5, "Excellent! Works on my TV"),
    (3, "Okay but too many ads"),
];

const ANDROID_REVIEWS: [(u8, &str); 2] = [
    (4, "Good app, streaming is smooth"),
    (2, "Slow login and buffering"),
];

fn review_json(platform: &str, store: &str, rating: u8, text: &str) -> Value {
    json!({
        "author": "tester",
        "title": "",
        "text": text,
        "rating": rating,
        "updated": "2025-11-01T00:00:00Z",
        "platform": platform,
        "store": store
    })
}

fn snapshot_json() -> Value {
    let apple: Vec<Value> = APPLE_REVIEWS
        .iter()
        .map(|&(rating, text)| review_json("iOS", "apple", rating, text))
        .collect();
    let android: Vec<Value> = ANDROID_REVIEWS
        .iter()
        .map(|&(rating, text)| review_json("Android", "google_play", rating, text))
        .collect();

    json!({
        "generated_utc": "2025-11-02T00:00:00Z",
        "apps": [
            {
                "app_name": "Univision",
                "apple": {
                    "app_id": "425226754",
                    "country": "us",
                    "summary": {"average_rating": 4.7, "rating_count": 1000, "version": "9.1"},
                    "reviews": apple
                },
                "google": {
                    "package": "com.univision.android",
                    "country": "us",
                    "summary": {"average_rating": 4.1, "rating_count": 500, "version": "9.0"},
                    "reviews": android
                }
            },
            {
                "app_name": "Canela.TV",
                "apple": {
                    "app_id": "1",
                    "country": "us",
                    "summary": {"error": "no lookup results for app_id=1 country=us"},
                    "reviews": [{"error": "apple_reviews_fetch_failed: 500"}]
                },
                "google": {"package": null, "country": null, "summary": null, "reviews": []}
            }
        ]
    })
}

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        apps_path: None,
        snapshot_path: dir.join("store_data_raw.json"),
        metrics_path: dir.join("app-metrics.json"),
        log_level: "info".to_string(),
        max_reviews_per_store: 50,
        request_timeout_secs: 1,
        page_delay_ms: 0,
        user_agent: "storepulse-test/0.1".to_string(),
        apple_base_url: "http://127.0.0.1:9".to_string(),
        google_play_base_url: "http://127.0.0.1:9".to_string(),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[test]
fn end_to_end_snapshot_to_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(
        &config.snapshot_path,
        serde_json::to_string_pretty(&snapshot_json()).unwrap(),
    )
    .unwrap();

    run_summarize(&config).unwrap();

    let metrics: Value =
        serde_json::from_str(&std::fs::read_to_string(&config.metrics_path).unwrap()).unwrap();
    let apps = metrics["apps"].as_array().unwrap();
    assert_eq!(apps.len(), 2);

    let univision = &apps[0];
    assert_eq!(univision["appName"], "Univision");
    // Summary ratings, not the review mean of 3.5 / 3.0.
    assert_eq!(univision["ios"]["rating"], json!(4.7));
    assert_eq!(univision["android"]["rating"], json!(4.1));

    let scores: Vec<f64> = APPLE_REVIEWS
        .iter()
        .chain(ANDROID_REVIEWS.iter())
        .map(|&(_, text)| sentiment_score(&LexiconPolarity, &clean_text(Some(text))))
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let expected = round3(scores.iter().sum::<f64>() / scores.len() as f64);
    assert_eq!(univision["sentiment"]["score"], json!(expected));
    assert_eq!(univision["sentiment"]["scoreDelta"], json!(0.0));
    assert_eq!(univision["sentiment"]["topPositive"].as_array().unwrap().len(), 3);
    assert_eq!(univision["sentiment"]["topNegative"].as_array().unwrap().len(), 3);

    let canela = &apps[1];
    assert_eq!(canela["appName"], "Canela.TV");
    assert_eq!(canela["ios"]["rating"], Value::Null);
    assert_eq!(canela["android"]["rating"], Value::Null);
    assert_eq!(canela["sentiment"]["score"], json!(0.5));
    assert_eq!(canela["sentiment"]["drivers"], json!([]));
}

#[test]
fn missing_snapshot_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let err = run_summarize(&config).unwrap_err();

    assert!(err.to_string().contains("store_data_raw.json"), "{err}");
    assert!(!config.metrics_path.exists());
}

#[test]
fn unparseable_snapshot_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(&config.snapshot_path, "{ not json").unwrap();

    assert!(run_summarize(&config).is_err());
    assert!(!config.metrics_path.exists());
}

#[test]
fn summarize_snapshot_keeps_app_order() {
    let snapshot: Snapshot = serde_json::from_value(snapshot_json()).unwrap();

    let document = summarize_snapshot(snapshot, &LexiconPolarity);

    let names: Vec<_> = document.apps.iter().map(|a| a.app_name.as_str()).collect();
    assert_eq!(names, vec!["Univision", "Canela.TV"]);
}

#[test]
fn unwritable_metrics_path_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    std::fs::write(
        &config.snapshot_path,
        serde_json::to_string(&snapshot_json()).unwrap(),
    )
    .unwrap();
    config.metrics_path = PathBuf::from(dir.path()).join("missing-dir").join("app-metrics.json");

    assert!(run_summarize(&config).is_err());
}
