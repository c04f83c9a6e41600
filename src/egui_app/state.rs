//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::ui::style;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Budget form field values.
    pub form: BudgetFormState,
    /// Latest prediction outcome shown below the form.
    pub prediction: PredictionPanelState,
    /// Footer status badge and message.
    pub status: StatusBarState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: BudgetFormState::default(),
            prediction: PredictionPanelState::Idle,
            status: StatusBarState::idle(),
        }
    }
}

/// Editable budget inputs, one per advertising channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetFormState {
    /// YouTube budget, USD.
    pub youtube: f64,
    /// TikTok budget, USD.
    pub tiktok: f64,
    /// Instagram budget, USD.
    pub instagram: f64,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self {
            youtube: 150.0,
            tiktok: 40.0,
            instagram: 60.0,
        }
    }
}

/// What the prediction panel is currently showing.
///
/// Each submission overwrites the previous value; nothing persists across
/// sessions.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionPanelState {
    /// No submission yet this session.
    Idle,
    /// Last submission produced an estimate.
    Estimate {
        /// Formatted currency text, e.g. `$45.68 K`.
        text: String,
        /// Raw predicted value in thousands of USD.
        value: f64,
    },
    /// Last submission failed inside the model.
    Error {
        /// User-facing message.
        message: String,
    },
}

/// Status badge and text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the message.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before the model has been resolved.
    pub fn idle() -> Self {
        Self {
            text: "Enter budgets and press Predict Sales".into(),
            badge_label: style::status_badge_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}
