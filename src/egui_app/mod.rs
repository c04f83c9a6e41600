//! egui application shell: state, controller, and renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
