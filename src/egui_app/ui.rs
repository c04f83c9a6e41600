//! egui renderer for the dashboard UI.

pub mod style;

use eframe::egui::{self, DragValue, Frame, Margin, RichText, StrokeKind, Ui};

use crate::egui_app::controller::AppController;
use crate::egui_app::state::PredictionPanelState;
use crate::egui_app::ui::style::StatusTone;
use crate::model::store::LoadOutcome;

/// Smallest window the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(720.0, 480.0);

const ABOUT_TEXT: &str = "This dashboard uses a linear regression model trained from \
historical advertising data to estimate total sales. Adjust the budgets for YouTube, \
TikTok, and Instagram to see how they impact the predicted result.";

/// Renders the egui UI using the shared controller state.
pub struct DashboardApp {
    controller: AppController,
    visuals_set: bool,
}

impl DashboardApp {
    /// Create the renderer around a prepared controller.
    pub fn new(controller: AppController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                RichText::new("💰 Sales Prediction Dashboard")
                    .color(palette.accent)
                    .size(26.0)
                    .strong(),
            );
            ui.label(
                RichText::new(
                    "Predict estimated sales based on your social media advertising budgets.",
                )
                .color(palette.text_muted),
            );
            ui.add_space(6.0);
        });
        ui.separator();
    }

    fn render_missing_banner(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let file_name = self
            .controller
            .artifact_path()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.controller.artifact_path().display().to_string());
        Frame::new()
            .fill(style::banner_fill(StatusTone::Warning))
            .stroke(style::banner_stroke(StatusTone::Warning))
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!(
                        "⚠️ Model file `{file_name}` not found. \
                         Place it in the application directory and restart."
                    ))
                    .color(palette.warning),
                );
                ui.add_space(6.0);
                if ui.button("Open model folder").clicked() {
                    self.controller.open_artifact_folder();
                }
            });
    }

    fn render_failed_banner(&self, ui: &mut Ui, description: &str) {
        let palette = style::palette();
        Frame::new()
            .fill(style::banner_fill(StatusTone::Error))
            .stroke(style::banner_stroke(StatusTone::Error))
            .inner_margin(Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.label(RichText::new(format!("❌ {description}")).color(palette.error));
            });
    }

    fn render_form(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("📊 Input Advertising Budgets (USD)")
                .color(palette.text_primary)
                .strong(),
        );
        ui.add_space(8.0);
        let steps = {
            let form = &self.controller.config().form;
            (form.youtube_step, form.tiktok_step, form.instagram_step)
        };
        let form = &mut self.controller.ui.form;
        ui.columns(3, |columns| {
            columns[0].label(RichText::new("🎬 YouTube").color(palette.text_muted));
            columns[0].add(
                DragValue::new(&mut form.youtube)
                    .range(0.0..=f64::MAX)
                    .speed(steps.0)
                    .max_decimals(2),
            );
            columns[1].label(RichText::new("🎵 TikTok").color(palette.text_muted));
            columns[1].add(
                DragValue::new(&mut form.tiktok)
                    .range(0.0..=f64::MAX)
                    .speed(steps.1)
                    .max_decimals(2),
            );
            columns[2].label(RichText::new("📸 Instagram").color(palette.text_muted));
            columns[2].add(
                DragValue::new(&mut form.instagram)
                    .range(0.0..=f64::MAX)
                    .speed(steps.2)
                    .max_decimals(2),
            );
        });
        ui.add_space(10.0);
        if ui.button(RichText::new("🔮 Predict Sales").strong()).clicked() {
            self.controller.submit();
        }
    }

    fn render_result(&self, ui: &mut Ui) {
        let palette = style::palette();
        match &self.controller.ui.prediction {
            PredictionPanelState::Idle => {}
            PredictionPanelState::Estimate { text, .. } => {
                ui.add_space(8.0);
                ui.separator();
                ui.label(
                    RichText::new("📈 Prediction Result")
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Estimated Total Sales")
                        .color(palette.text_muted)
                        .size(13.0),
                );
                ui.label(RichText::new(text).color(palette.accent).size(32.0).strong());
                ui.add_space(6.0);
                ui.label(
                    RichText::new("✅ Prediction completed successfully!")
                        .color(palette.success),
                );
            }
            PredictionPanelState::Error { message } => {
                ui.add_space(8.0);
                ui.separator();
                ui.label(
                    RichText::new("📈 Prediction Result")
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label(RichText::new(message).color(palette.error));
            }
        }
    }

    fn render_about_panel(&self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::SidePanel::right("about_panel")
            .resizable(false)
            .min_width(220.0)
            .max_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("ℹ️ About This App")
                        .color(palette.text_primary)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label(RichText::new(ABOUT_TEXT).color(palette.text_muted));
            });
    }

    fn render_status(&self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        egui::Stroke::new(1.0, palette.panel_outline),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_about_panel(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.add_space(10.0);
            match self.controller.model_outcome() {
                LoadOutcome::Ready(_) => {
                    self.render_form(ui);
                    self.render_result(ui);
                }
                LoadOutcome::Missing => self.render_missing_banner(ui),
                LoadOutcome::Failed(err) => self.render_failed_banner(ui, &err.to_string()),
            }
        });
    }
}
