pub mod app_config;
pub mod apps;
pub mod config;
pub mod metrics;
pub mod snapshot;

mod error;

pub use app_config::AppConfig;
pub use apps::{default_apps, load_apps, AppleConfig, AppsFile, GooglePlayConfig, TrackedApp};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use metrics::{
    AppMetrics, Driver, MetricsDocument, PlatformRating, ReviewExcerpt, SentimentSummary, Trend,
};
pub use snapshot::{
    AppSnapshot, AppleSnapshot, FetchFailure, GooglePlaySnapshot, Platform, Review, ReviewEntry,
    Snapshot, Store, StoreSummary, SummaryEntry,
};
