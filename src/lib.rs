//! Library exports for reuse in tools and tests.
/// Filesystem locations for application state.
pub mod app_dirs;
/// Labeled advertising-budget records.
pub mod budget;
/// TOML-backed application settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Regression model artifact and loader.
pub mod model;
