//! Bridges the model store and form state to the egui renderer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::budget::BudgetRecord;
use crate::config::AppConfig;
use crate::egui_app::state::{BudgetFormState, PredictionPanelState, StatusBarState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::model::store::{LoadOutcome, ModelStore};

/// Maintains app state and bridges the prediction flow to the egui UI.
pub struct AppController {
    /// UI model consumed by the renderer.
    pub ui: UiState,
    store: Arc<ModelStore>,
    config: AppConfig,
}

impl AppController {
    /// Create a controller around an injected model store.
    ///
    /// Resolves the model immediately so the session state is known before
    /// the first frame renders.
    pub fn new(store: Arc<ModelStore>, config: AppConfig) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            store,
            config,
        };
        controller.ui.form = BudgetFormState {
            youtube: controller.config.form.youtube_default,
            tiktok: controller.config.form.tiktok_default,
            instagram: controller.config.form.instagram_default,
        };
        controller.refresh_model_status();
        controller
    }

    /// Loaded settings, read-only.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve the memoized model outcome for this session.
    pub fn model_outcome(&self) -> LoadOutcome {
        self.store.get()
    }

    /// Path the artifact is expected at, for banner text.
    pub fn artifact_path(&self) -> &Path {
        self.store.path()
    }

    /// Run one prediction from the current form values.
    ///
    /// Only called while a model is present; edits alone never trigger this.
    pub fn submit(&mut self) {
        let LoadOutcome::Ready(model) = self.store.get() else {
            return;
        };
        let record = BudgetRecord::new(
            self.ui.form.youtube,
            self.ui.form.tiktok,
            self.ui.form.instagram,
        );
        match model.predict(&[record]) {
            Ok(predictions) => {
                let Some(estimate) = predictions.first().copied() else {
                    self.ui.prediction = PredictionPanelState::Error {
                        message: view_model::prediction_error_text(
                            "model returned no predictions",
                        ),
                    };
                    self.set_status("Prediction failed".into(), StatusTone::Error);
                    return;
                };
                tracing::info!(estimate, "Prediction completed");
                self.ui.prediction = PredictionPanelState::Estimate {
                    text: view_model::sales_metric_text(estimate),
                    value: estimate,
                };
                self.set_status("Prediction completed".into(), StatusTone::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Prediction failed");
                self.ui.prediction = PredictionPanelState::Error {
                    message: view_model::prediction_error_text(&err.to_string()),
                };
                self.set_status("Prediction failed".into(), StatusTone::Error);
            }
        }
    }

    /// Open the folder that should contain the model artifact.
    pub fn open_artifact_folder(&mut self) {
        let dir = self
            .store
            .path()
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        if let Err(err) = open::that(&dir) {
            self.set_status(
                format!("Could not open {}: {err}", dir.display()),
                StatusTone::Error,
            );
        }
    }

    /// Surface a non-fatal startup problem in the status bar.
    pub fn note_startup_warning(&mut self, message: &str) {
        self.set_status(message.to_string(), StatusTone::Warning);
    }

    fn refresh_model_status(&mut self) {
        match self.store.get() {
            LoadOutcome::Ready(model) => {
                self.set_status(
                    format!(
                        "Model loaded from {} ({} features)",
                        self.store.path().display(),
                        model.coefficients.len()
                    ),
                    StatusTone::Info,
                );
            }
            LoadOutcome::Missing => {
                self.set_status("Model artifact missing".into(), StatusTone::Warning);
            }
            LoadOutcome::Failed(_) => {
                self.set_status("Model artifact failed to load".into(), StatusTone::Error);
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: String, tone: StatusTone) {
        self.ui.status = StatusBarState {
            text,
            badge_label: style::status_badge_label(tone).into(),
            badge_color: style::status_badge_color(tone),
        };
    }
}
