//! Locations of salescast's on-disk state.
//!
//! Everything lives in one `.salescast` folder under the platform config
//! root. Setting `SALESCAST_CONFIG_HOME` relocates the root, which keeps
//! tests hermetic and enables portable installs.

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex};

use directories::BaseDirs;
use thiserror::Error;

/// Directory created under the OS config root.
pub const APP_DIR_NAME: &str = ".salescast";

static ROOT_OVERRIDE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No base config directory is available on this platform.
    #[error("No base config directory is available on this platform")]
    NoBaseDir,
    /// A directory under the application root could not be created.
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
}

/// The `.salescast` root, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = resolve_base().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(base.join(APP_DIR_NAME))
}

/// Directory for rotated log files, created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let root = app_root_dir()?;
    ensure_dir(root.join("logs"))
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppDirError::CreateDir { path, source }),
    }
}

fn resolve_base() -> Option<PathBuf> {
    if let Some(path) = ROOT_OVERRIDE.lock().ok().and_then(|guard| guard.clone()) {
        return Some(path);
    }
    if let Ok(path) = std::env::var("SALESCAST_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
fn set_root_override(path: PathBuf) {
    *ROOT_OVERRIDE.lock().expect("root override mutex poisoned") = Some(path);
}

#[cfg(test)]
fn clear_root_override() {
    *ROOT_OVERRIDE.lock().expect("root override mutex poisoned") = None;
}
