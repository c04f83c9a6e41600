//! Application settings persisted as TOML under the `.salescast` root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{app_dirs, model};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Aggregate application settings loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the regression artifact is loaded from.
    #[serde(default)]
    pub model: ModelSettings,
    /// Budget form defaults and drag steps.
    #[serde(default)]
    pub form: FormSettings,
}

impl AppConfig {
    /// Resolve the artifact path: explicit override, or the canonical
    /// filename in the process working directory.
    pub fn artifact_path(&self) -> PathBuf {
        self.model
            .artifact_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(model::MODEL_FILE_NAME))
    }
}

/// Model artifact location preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Optional override for the artifact path.
    #[serde(default)]
    pub artifact_path: Option<PathBuf>,
}

/// Per-channel form defaults and the increment each drag step applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    /// Starting YouTube budget.
    #[serde(default = "default_youtube_budget")]
    pub youtube_default: f64,
    /// Starting TikTok budget.
    #[serde(default = "default_tiktok_budget")]
    pub tiktok_default: f64,
    /// Starting Instagram budget.
    #[serde(default = "default_instagram_budget")]
    pub instagram_default: f64,
    /// Drag step for the YouTube input.
    #[serde(default = "default_youtube_step")]
    pub youtube_step: f64,
    /// Drag step for the TikTok input.
    #[serde(default = "default_tiktok_step")]
    pub tiktok_step: f64,
    /// Drag step for the Instagram input.
    #[serde(default = "default_instagram_step")]
    pub instagram_step: f64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            youtube_default: default_youtube_budget(),
            tiktok_default: default_tiktok_budget(),
            instagram_default: default_instagram_budget(),
            youtube_step: default_youtube_step(),
            tiktok_step: default_tiktok_step(),
            instagram_step: default_instagram_step(),
        }
    }
}

fn default_youtube_budget() -> f64 {
    150.0
}

fn default_tiktok_budget() -> f64 {
    40.0
}

fn default_instagram_budget() -> f64 {
    60.0
}

fn default_youtube_step() -> f64 {
    10.0
}

fn default_tiktok_step() -> f64 {
    5.0
}

fn default_instagram_step() -> f64 {
    5.0
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the directory that holds the config file.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Config file path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// Config file path.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },
    /// Settings could not be serialized to TOML.
    #[error("Failed to serialize config to TOML: {0}")]
    SerializeToml(toml::ser::Error),
    /// No suitable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_from_path(&path)
}

/// Load configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let rendered = toml::to_string_pretty(config).map_err(ConfigError::SerializeToml)?;
    std::fs::write(path, rendered).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn form_defaults_match_the_dashboard_presets() {
        let form = FormSettings::default();
        assert_eq!(form.youtube_default, 150.0);
        assert_eq!(form.tiktok_default, 40.0);
        assert_eq!(form.instagram_default, 60.0);
        assert_eq!(form.youtube_step, 10.0);
        assert_eq!(form.tiktok_step, 5.0);
        assert_eq!(form.instagram_step, 5.0);
    }

    #[test]
    fn artifact_path_defaults_to_working_dir_filename() {
        let config = AppConfig::default();
        assert_eq!(
            config.artifact_path(),
            PathBuf::from(model::MODEL_FILE_NAME)
        );
    }

    #[test]
    fn artifact_path_honors_override() {
        let config = AppConfig {
            model: ModelSettings {
                artifact_path: Some(PathBuf::from("/srv/models/reg.json")),
            },
            ..AppConfig::default()
        };
        assert_eq!(config.artifact_path(), PathBuf::from("/srv/models/reg.json"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.model.artifact_path = Some(PathBuf::from("models/custom.json"));
        config.form.youtube_default = 250.0;
        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(
            loaded.model.artifact_path,
            Some(PathBuf::from("models/custom.json"))
        );
        assert_eq!(loaded.form.youtube_default, 250.0);
        assert_eq!(loaded.form.tiktok_step, 5.0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[form]\nyoutube_default = 500.0\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.form.youtube_default, 500.0);
        assert_eq!(loaded.form.instagram_default, 60.0);
        assert!(loaded.model.artifact_path.is_none());
    }

    #[test]
    fn invalid_toml_is_reported_with_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }
}
