use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// configuration: embedded registry, `store_data_raw.json` and
/// `app-metrics.json` in the working directory, 50 reviews per store.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let apps_path = lookup("STOREPULSE_APPS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let snapshot_path = PathBuf::from(or_default("STOREPULSE_SNAPSHOT_PATH", "store_data_raw.json"));
    let metrics_path = PathBuf::from(or_default("STOREPULSE_METRICS_PATH", "app-metrics.json"));
    let log_level = or_default("STOREPULSE_LOG_LEVEL", "info");

    let max_reviews_per_store = parse_usize("STOREPULSE_MAX_REVIEWS_PER_STORE", "50")?;
    if max_reviews_per_store == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREPULSE_MAX_REVIEWS_PER_STORE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("STOREPULSE_REQUEST_TIMEOUT_SECS", "15")?;
    let page_delay_ms = parse_u64("STOREPULSE_PAGE_DELAY_MS", "500")?;
    let user_agent = or_default(
        "STOREPULSE_USER_AGENT",
        "storepulse/0.1 (app-store-monitoring)",
    );
    let apple_base_url = or_default("STOREPULSE_APPLE_BASE_URL", "https://itunes.apple.com/");
    let google_play_base_url =
        or_default("STOREPULSE_GOOGLE_PLAY_BASE_URL", "https://play.google.com/");

    Ok(AppConfig {
        apps_path,
        snapshot_path,
        metrics_path,
        log_level,
        max_reviews_per_store,
        request_timeout_secs,
        page_delay_ms,
        user_agent,
        apple_base_url,
        google_play_base_url,
    })
}
