//! Tracing initialization.
//!
//! Log lines go to stdout and to a daily-rotated file under
//! `.salescast/logs`. Rotation keeps a handful of recent files; the rest are
//! removed at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use time::UtcOffset;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "salescast.log";
const KEEP_LOG_FILES: usize = 6;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform offers no writable data directory.
    #[error("no data directory available for log files")]
    NoDataDir,
    /// The log directory could not be created or pruned.
    #[error("could not prepare log directory {path}: {source}")]
    PrepareDir {
        /// Log directory path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// Another global subscriber is already installed.
    #[error("could not install the tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Route tracing output to stdout and a rotating file.
///
/// Calling more than once is a no-op. Errors leave logging disabled and are
/// returned so the caller can report them without aborting startup.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = match app_dirs::logs_dir() {
        Ok(dir) => dir,
        Err(app_dirs::AppDirError::NoBaseDir) => return Err(LoggingError::NoDataDir),
        Err(app_dirs::AppDirError::CreateDir { path, source }) => {
            return Err(LoggingError::PrepareDir { path, source });
        }
    };
    prune_rotated_logs(&log_dir, KEEP_LOG_FILES).map_err(|source| LoggingError::PrepareDir {
        path: log_dir.clone(),
        source,
    })?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::daily(&log_dir, LOG_FILE_NAME));
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = fmt::time::OffsetTime::new(offset, TIMESTAMP_FORMAT);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging to {}", log_dir.display());
    Ok(())
}

/// Remove the oldest rotated files so at most `keep` remain.
fn prune_rotated_logs(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_log = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(LOG_FILE_NAME));
        if !is_log || !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((modified, entry.path()));
    }
    if files.len() <= keep {
        return Ok(());
    }
    files.sort_by_key(|(modified, _)| *modified);
    let excess = files.len() - keep;
    for (_, path) in files.drain(..excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    #[test]
    fn prune_removes_oldest_files_beyond_limit() {
        let dir = tempdir().unwrap();
        for day in 1..=9 {
            let path = dir.path().join(format!("{LOG_FILE_NAME}.2026-08-0{day}"));
            fs::write(&path, b"log line\n").unwrap();
            thread::sleep(Duration::from_millis(10));
        }

        prune_rotated_logs(dir.path(), KEEP_LOG_FILES).unwrap();
        let mut remaining: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(|name| name.to_string()))
            .collect();
        remaining.sort();
        assert_eq!(remaining.len(), KEEP_LOG_FILES);
        // Oldest files go first.
        assert_eq!(
            remaining.first().map(String::as_str),
            Some("salescast.log.2026-08-04")
        );
    }

    #[test]
    fn prune_ignores_unrelated_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();
        prune_rotated_logs(dir.path(), 0).unwrap();
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn prune_is_a_no_op_under_the_limit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(format!("{LOG_FILE_NAME}.2026-08-01"));
        fs::write(&path, b"log line\n").unwrap();
        prune_rotated_logs(dir.path(), KEEP_LOG_FILES).unwrap();
        assert!(path.exists());
    }
}
