use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Registry compiled into the binary; used when no apps file is configured.
const DEFAULT_APPS_YAML: &str = include_str!("../../../config/apps.yaml");

fn default_country() -> String {
    "us".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

/// App Store listing coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppleConfig {
    /// Numeric iTunes track id, kept as a string.
    pub app_id: String,
    #[serde(default = "default_country")]
    pub country: String,
}

/// Google Play listing coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooglePlayConfig {
    pub package: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedApp {
    pub app_name: String,
    #[serde(default)]
    pub apple: Option<AppleConfig>,
    #[serde(default)]
    pub google: Option<GooglePlayConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AppsFile {
    pub apps: Vec<TrackedApp>,
}

/// Load and validate the app registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_apps(path: &Path) -> Result<AppsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AppsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_apps(&content)
}

/// The registry shipped with the binary (`config/apps.yaml`).
///
/// # Errors
///
/// Returns `ConfigError` if the embedded registry fails to parse or validate.
pub fn default_apps() -> Result<AppsFile, ConfigError> {
    parse_apps(DEFAULT_APPS_YAML)
}

fn parse_apps(content: &str) -> Result<AppsFile, ConfigError> {
    let apps_file: AppsFile = serde_yaml::from_str(content)?;
    validate_apps(&apps_file)?;
    Ok(apps_file)
}

fn validate_apps(apps_file: &AppsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for app in &apps_file.apps {
        if app.app_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "app_name must be non-empty".to_string(),
            ));
        }

        if app.apple.is_none() && app.google.is_none() {
            return Err(ConfigError::Validation(format!(
                "app '{}' has neither an apple nor a google block",
                app.app_name
            )));
        }

        if let Some(apple) = &app.apple {
            if apple.app_id.is_empty() || !apple.app_id.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::Validation(format!(
                    "app '{}' has invalid apple app_id '{}'; must be numeric",
                    app.app_name, apple.app_id
                )));
            }
        }

        if let Some(google) = &app.google {
            if google.package.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "app '{}' has an empty google package",
                    app.app_name
                )));
            }
        }

        if !seen_names.insert(app.app_name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate app name: '{}'",
                app.app_name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "apps_test.rs"]
mod tests;
