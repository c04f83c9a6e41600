#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based salescast dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use salescast::config;
use salescast::egui_app::controller::AppController;
use salescast::egui_app::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use salescast::logging;
use salescast::model::store::ModelStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let (cfg, config_warning) = match config::load_or_default() {
        Ok(cfg) => (cfg, None),
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to default configuration");
            (config::AppConfig::default(), Some(err.to_string()))
        }
    };
    let store = Arc::new(ModelStore::new(cfg.artifact_path()));

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(960.0, 640.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Salescast",
        native_options,
        Box::new(move |_cc| {
            let mut controller = AppController::new(store, cfg);
            if let Some(warning) = config_warning {
                controller.note_startup_warning(&warning);
            }
            Ok(Box::new(DashboardApp::new(controller)))
        }),
    )?;
    Ok(())
}
