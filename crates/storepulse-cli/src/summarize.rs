//! Summarization stage: snapshot file in, metrics file out.

use chrono::Utc;
use storepulse_core::{AppConfig, MetricsDocument, Snapshot};
use storepulse_sentiment::{summarize_app, LexiconPolarity, PolarityEstimator};

use crate::output::{read_json, write_json};

/// Reads the snapshot, scores every app and writes the metrics file.
///
/// # Errors
///
/// Returns an error if the snapshot is missing or unparseable, or the
/// metrics file cannot be written.
pub(crate) fn run_summarize(config: &AppConfig) -> anyhow::Result<()> {
    let snapshot: Snapshot = read_json(&config.snapshot_path)?;
    tracing::info!(
        apps = snapshot.apps.len(),
        path = %config.snapshot_path.display(),
        "loaded snapshot"
    );

    let document = summarize_snapshot(snapshot, &LexiconPolarity);

    write_json(&config.metrics_path, &document)?;
    tracing::info!(
        apps = document.apps.len(),
        path = %config.metrics_path.display(),
        "wrote metrics"
    );
    Ok(())
}

/// One metrics entry per snapshot app, in snapshot order.
pub(crate) fn summarize_snapshot<E>(snapshot: Snapshot, estimator: &E) -> MetricsDocument
where
    E: PolarityEstimator + ?Sized,
{
    let apps = snapshot
        .apps
        .into_iter()
        .map(|app| summarize_app(app, estimator))
        .collect();

    MetricsDocument {
        generated_utc: Utc::now(),
        apps,
    }
}

#[cfg(test)]
#[path = "summarize_test.rs"]
mod tests;
