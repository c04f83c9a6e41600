//! Regression model artifact: deserialization, validation, and
//! once-per-process loading.

pub mod regression;
pub mod store;

/// Canonical artifact filename produced by the training pipeline.
pub const MODEL_FILE_NAME: &str = "model-reg-67130701915.json";
