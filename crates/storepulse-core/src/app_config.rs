use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Registry override; `None` means the embedded `config/apps.yaml`.
    pub apps_path: Option<PathBuf>,
    pub snapshot_path: PathBuf,
    pub metrics_path: PathBuf,
    pub log_level: String,
    pub max_reviews_per_store: usize,
    pub request_timeout_secs: u64,
    /// Sleep between paginated review requests.
    pub page_delay_ms: u64,
    pub user_agent: String,
    pub apple_base_url: String,
    pub google_play_base_url: String,
}
