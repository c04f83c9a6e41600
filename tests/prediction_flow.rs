//! End-to-end prediction flow against real artifacts on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use salescast::config::AppConfig;
use salescast::egui_app::controller::AppController;
use salescast::egui_app::state::PredictionPanelState;
use salescast::model::MODEL_FILE_NAME;
use salescast::model::store::{LoadOutcome, ModelStore};
use tempfile::tempdir;

const VALID_ARTIFACT: &str = r#"{
    "model_version": 1,
    "target": "sales",
    "intercept": 3.5,
    "coefficients": [
        {"feature": "youtube", "weight": 0.05},
        {"feature": "tiktok", "weight": 0.2},
        {"feature": "instagram", "weight": 0.01}
    ]
}"#;

fn write_artifact(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join(MODEL_FILE_NAME);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn submission_shows_a_formatted_estimate() {
    let dir = tempdir().unwrap();
    let path = write_artifact(dir.path(), VALID_ARTIFACT);
    let store = Arc::new(ModelStore::new(path));
    let mut controller = AppController::new(store, AppConfig::default());

    controller.submit();

    // Defaults 150/40/60 -> 3.5 + 7.5 + 8.0 + 0.6 = 19.6
    match &controller.ui.prediction {
        PredictionPanelState::Estimate { text, value } => {
            assert_eq!(text, "$19.60 K");
            assert!((value - 19.6).abs() < 1e-9);
        }
        other => panic!("expected an estimate, got {other:?}"),
    }
}

#[test]
fn zero_budgets_still_predict() {
    let dir = tempdir().unwrap();
    let path = write_artifact(dir.path(), VALID_ARTIFACT);
    let store = Arc::new(ModelStore::new(path));
    let mut controller = AppController::new(store, AppConfig::default());

    controller.ui.form.youtube = 0.0;
    controller.ui.form.tiktok = 0.0;
    controller.ui.form.instagram = 0.0;
    controller.submit();

    match &controller.ui.prediction {
        PredictionPanelState::Estimate { text, .. } => assert_eq!(text, "$3.50 K"),
        other => panic!("expected an estimate, got {other:?}"),
    }
}

#[test]
fn missing_artifact_disables_the_prediction_path() {
    let dir = tempdir().unwrap();
    let store = Arc::new(ModelStore::new(dir.path().join(MODEL_FILE_NAME)));
    let mut controller = AppController::new(store.clone(), AppConfig::default());

    assert!(matches!(controller.model_outcome(), LoadOutcome::Missing));
    controller.submit();
    assert_eq!(controller.ui.prediction, PredictionPanelState::Idle);
}

#[test]
fn corrupt_artifact_is_reported_as_a_failure_not_absence() {
    let dir = tempdir().unwrap();
    let path = write_artifact(dir.path(), "{ definitely not an artifact");
    let store = Arc::new(ModelStore::new(path));
    let controller = AppController::new(store, AppConfig::default());

    assert!(matches!(controller.model_outcome(), LoadOutcome::Failed(_)));
}

#[test]
fn the_artifact_is_deserialized_at_most_once_per_process() {
    let dir = tempdir().unwrap();
    let path = write_artifact(dir.path(), VALID_ARTIFACT);
    let store = Arc::new(ModelStore::new(path));
    let mut controller = AppController::new(store.clone(), AppConfig::default());

    for _ in 0..4 {
        controller.submit();
        assert!(controller.model_outcome().model().is_some());
    }
    assert_eq!(store.disk_reads(), 1);
}

#[test]
fn predict_failures_surface_the_error_prefix() {
    let dir = tempdir().unwrap();
    let body = r#"{
        "model_version": 1,
        "intercept": 1.0,
        "coefficients": [
            {"feature": "youtube", "weight": 0.05},
            {"feature": "radio", "weight": 1.0}
        ]
    }"#;
    let path = write_artifact(dir.path(), body);
    let store = Arc::new(ModelStore::new(path));
    let mut controller = AppController::new(store, AppConfig::default());

    controller.submit();

    match &controller.ui.prediction {
        PredictionPanelState::Error { message } => {
            assert!(message.starts_with("❌ An error occurred:"));
        }
        other => panic!("expected an error, got {other:?}"),
    }
}
