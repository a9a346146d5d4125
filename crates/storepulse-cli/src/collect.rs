//! Collection stage: one pass over the registry, both stores per app.
//!
//! Apps are processed strictly one after another, Apple before Google Play.
//! Store failures end up as inline markers in the snapshot, so the only
//! errors returned here are setup and file-writing failures.

use anyhow::Context;
use chrono::Utc;
use storepulse_core::{AppConfig, AppSnapshot, Snapshot, TrackedApp};
use storepulse_stores::{collect_apple, collect_google_play, AppleClient, GooglePlayClient};

use crate::output::write_json;

/// Loads the registry: the YAML override when configured, otherwise the
/// embedded default.
pub(crate) fn load_tracked_apps(config: &AppConfig) -> anyhow::Result<Vec<TrackedApp>> {
    let file = match &config.apps_path {
        Some(path) => storepulse_core::load_apps(path)
            .with_context(|| format!("failed to load app registry {}", path.display()))?,
        None => storepulse_core::default_apps().context("embedded app registry is invalid")?,
    };
    Ok(file.apps)
}

/// Fetches every tracked app and writes the snapshot file.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded, a store client cannot
/// be built, or the snapshot cannot be written.
pub(crate) async fn run_collect(config: &AppConfig) -> anyhow::Result<()> {
    let apps = load_tracked_apps(config)?;

    let apple = AppleClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.apple_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build App Store client: {e}"))?;
    let google = GooglePlayClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        config.page_delay_ms,
        &config.google_play_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Google Play client: {e}"))?;

    let snapshot = collect_snapshot(&apps, &apple, &google, config.max_reviews_per_store).await;

    write_json(&config.snapshot_path, &snapshot)?;
    tracing::info!(
        apps = snapshot.apps.len(),
        path = %config.snapshot_path.display(),
        "wrote snapshot"
    );
    Ok(())
}

pub(crate) async fn collect_snapshot(
    apps: &[TrackedApp],
    apple: &AppleClient,
    google: &GooglePlayClient,
    max_reviews: usize,
) -> Snapshot {
    let mut collected = Vec::with_capacity(apps.len());

    for app in apps {
        tracing::info!(app = %app.app_name, "collecting");

        let apple_section =
            collect_apple(apple, &app.app_name, app.apple.as_ref(), max_reviews).await;
        let google_section =
            collect_google_play(google, &app.app_name, app.google.as_ref(), max_reviews).await;

        collected.push(AppSnapshot {
            app_name: app.app_name.clone(),
            apple: apple_section,
            google: google_section,
        });
    }

    Snapshot {
        generated_utc: Utc::now(),
        apps: collected,
    }
}
