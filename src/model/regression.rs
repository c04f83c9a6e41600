use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::budget::BudgetRecord;

/// Weight applied to one named input feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureWeight {
    /// Column label the weight applies to.
    pub feature: String,
    /// Regression coefficient, in predicted units per budget unit.
    pub weight: f64,
}

/// Linear regression model over named advertising-budget features.
///
/// The artifact is JSON written by the training pipeline. Predictions are
/// expressed in thousands of USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Artifact format version.
    pub model_version: i64,
    /// Name of the predicted quantity.
    #[serde(default = "default_target")]
    pub target: String,
    /// Intercept term.
    pub intercept: f64,
    /// Ordered feature coefficients.
    pub coefficients: Vec<FeatureWeight>,
}

fn default_target() -> String {
    "sales".to_string()
}

/// Errors raised while evaluating a prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The model references a feature the input record does not carry.
    #[error("model expects feature '{feature}' which is not present in the input")]
    UnknownFeature {
        /// Label of the missing feature.
        feature: String,
    },
    /// An input value is NaN or infinite.
    #[error("input for '{feature}' is not a finite number")]
    NonFiniteInput {
        /// Label of the offending feature.
        feature: String,
    },
}

impl RegressionModel {
    /// Validate structural invariants of a deserialized artifact.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("Model must contain at least one coefficient".to_string());
        }
        if !self.intercept.is_finite() {
            return Err("Model intercept must be finite".to_string());
        }
        for (idx, coef) in self.coefficients.iter().enumerate() {
            if coef.feature.trim().is_empty() {
                return Err(format!("Coefficient {idx} is missing a feature label"));
            }
            if !coef.weight.is_finite() {
                return Err(format!(
                    "Coefficient for '{}' must be finite",
                    coef.feature
                ));
            }
        }
        for (idx, coef) in self.coefficients.iter().enumerate() {
            let first = self
                .coefficients
                .iter()
                .position(|other| other.feature == coef.feature);
            if first != Some(idx) {
                return Err(format!("Duplicate coefficient for '{}'", coef.feature));
            }
        }
        Ok(())
    }

    /// Load a model from a JSON artifact file.
    pub fn load_json(path: &Path) -> Result<Self, String> {
        let bytes = std::fs::read(path).map_err(|err| err.to_string())?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|err| err.to_string())?;
        model.validate()?;
        Ok(model)
    }

    /// Evaluate the model for each record, one prediction per row.
    pub fn predict(&self, records: &[BudgetRecord]) -> Result<Vec<f64>, PredictError> {
        let mut predictions = Vec::with_capacity(records.len());
        for record in records {
            predictions.push(self.predict_row(record)?);
        }
        Ok(predictions)
    }

    fn predict_row(&self, record: &BudgetRecord) -> Result<f64, PredictError> {
        let mut total = self.intercept;
        for coef in &self.coefficients {
            let value =
                record
                    .value(&coef.feature)
                    .ok_or_else(|| PredictError::UnknownFeature {
                        feature: coef.feature.clone(),
                    })?;
            if !value.is_finite() {
                return Err(PredictError::NonFiniteInput {
                    feature: coef.feature.clone(),
                });
            }
            total += coef.weight * value;
        }
        Ok(total)
    }
}
