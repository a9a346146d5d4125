use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read apps file {path}: {source}")]
    AppsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse apps file: {0}")]
    AppsFileParse(#[from] serde_yaml::Error),

    #[error("apps validation failed: {0}")]
    Validation(String),
}
