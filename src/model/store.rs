//! Once-per-process loading of the regression artifact.
//!
//! The artifact is resolved a single time; a missing file is an expected
//! deployment state (the dashboard disables prediction for the session),
//! while a present-but-unusable file is reported as a distinct failure.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{
        Arc, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use thiserror::Error;

use super::regression::RegressionModel;

/// Errors raised when the artifact exists but cannot be used.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// The file could not be read for a reason other than absence.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        /// Artifact path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
    /// The file is not valid artifact JSON.
    #[error("Model artifact {path} is not valid JSON: {source}")]
    Parse {
        /// Artifact path.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
    /// The artifact parsed but failed structural validation.
    #[error("Model artifact {path} is invalid: {reason}")]
    Invalid {
        /// Artifact path.
        path: PathBuf,
        /// Validation failure description.
        reason: String,
    },
}

/// Result of resolving the artifact, memoized per process.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Artifact loaded and validated; shared read-only for the session.
    Ready(Arc<RegressionModel>),
    /// No file at the expected path.
    Missing,
    /// The file exists but could not be loaded.
    Failed(Arc<ModelLoadError>),
}

impl LoadOutcome {
    /// The loaded model, when one is available.
    pub fn model(&self) -> Option<Arc<RegressionModel>> {
        match self {
            LoadOutcome::Ready(model) => Some(model.clone()),
            _ => None,
        }
    }
}

/// Memoized loader for the regression artifact.
///
/// The first `get` reads and deserializes the file; every later call returns
/// the cached outcome without touching the disk again.
pub struct ModelStore {
    path: PathBuf,
    slot: OnceLock<LoadOutcome>,
    disk_reads: AtomicUsize,
}

impl ModelStore {
    /// Create a store for the artifact at `path`. Nothing is read until `get`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: OnceLock::new(),
            disk_reads: AtomicUsize::new(0),
        }
    }

    /// Path this store resolves.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the artifact on first call; cached afterwards.
    pub fn get(&self) -> LoadOutcome {
        self.slot.get_or_init(|| self.read_from_disk()).clone()
    }

    /// Number of times the artifact has been read from disk.
    pub fn disk_reads(&self) -> usize {
        self.disk_reads.load(Ordering::Relaxed)
    }

    fn read_from_disk(&self) -> LoadOutcome {
        self.disk_reads.fetch_add(1, Ordering::Relaxed);
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Model artifact not found at {}", self.path.display());
                return LoadOutcome::Missing;
            }
            Err(source) => {
                return LoadOutcome::Failed(Arc::new(ModelLoadError::Read {
                    path: self.path.clone(),
                    source,
                }));
            }
        };
        let model: RegressionModel = match serde_json::from_slice(&bytes) {
            Ok(model) => model,
            Err(source) => {
                return LoadOutcome::Failed(Arc::new(ModelLoadError::Parse {
                    path: self.path.clone(),
                    source,
                }));
            }
        };
        if let Err(reason) = model.validate() {
            return LoadOutcome::Failed(Arc::new(ModelLoadError::Invalid {
                path: self.path.clone(),
                reason,
            }));
        }
        tracing::info!(
            features = model.coefficients.len(),
            "Model artifact loaded from {}",
            self.path.display()
        );
        LoadOutcome::Ready(Arc::new(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::regression::FeatureWeight;
    use tempfile::tempdir;

    fn artifact_json() -> Vec<u8> {
        let model = RegressionModel {
            model_version: 1,
            target: "sales".to_string(),
            intercept: 2.0,
            coefficients: vec![FeatureWeight {
                feature: "youtube".to_string(),
                weight: 0.1,
            }],
        };
        serde_json::to_vec(&model).unwrap()
    }

    #[test]
    fn loads_a_valid_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, artifact_json()).unwrap();
        let store = ModelStore::new(&path);
        let model = store.get().model().expect("model should load");
        assert_eq!(model.coefficients.len(), 1);
    }

    #[test]
    fn missing_file_is_the_absent_sentinel() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nope.json"));
        assert!(matches!(store.get(), LoadOutcome::Missing));
    }

    #[test]
    fn corrupt_file_is_a_distinct_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, b"not json at all").unwrap();
        let store = ModelStore::new(&path);
        match store.get() {
            LoadOutcome::Failed(err) => {
                assert!(matches!(*err, ModelLoadError::Parse { .. }));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn invalid_artifact_reports_validation_reason() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(
            &path,
            br#"{"model_version":1,"intercept":1.0,"coefficients":[]}"#,
        )
        .unwrap();
        let store = ModelStore::new(&path);
        match store.get() {
            LoadOutcome::Failed(err) => {
                assert!(matches!(*err, ModelLoadError::Invalid { .. }));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn repeated_gets_hit_the_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, artifact_json()).unwrap();
        let store = ModelStore::new(&path);
        for _ in 0..5 {
            assert!(store.get().model().is_some());
        }
        assert_eq!(store.disk_reads(), 1);
    }

    #[test]
    fn missing_outcome_is_also_memoized() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nope.json"));
        assert!(matches!(store.get(), LoadOutcome::Missing));
        assert!(matches!(store.get(), LoadOutcome::Missing));
        assert_eq!(store.disk_reads(), 1);
    }
}
