//! Palette and visuals shared by the renderer.

use eframe::egui::{Color32, Stroke, Visuals, epaint::CornerRadius, style::WidgetVisuals};

/// Colors used across the dashboard.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Window background.
    pub bg_primary: Color32,
    /// Panel background.
    pub bg_secondary: Color32,
    /// Widget background.
    pub bg_tertiary: Color32,
    /// Outline between panels.
    pub panel_outline: Color32,
    /// Default text.
    pub text_primary: Color32,
    /// De-emphasized text.
    pub text_muted: Color32,
    /// Header and metric accent.
    pub accent: Color32,
    /// Successful-prediction tint.
    pub success: Color32,
    /// Missing-artifact tint.
    pub warning: Color32,
    /// Failure tint.
    pub error: Color32,
}

/// The dashboard palette.
pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(13, 14, 16),
        bg_secondary: Color32::from_rgb(24, 26, 29),
        bg_tertiary: Color32::from_rgb(38, 41, 46),
        panel_outline: Color32::from_rgb(46, 50, 56),
        text_primary: Color32::from_rgb(208, 213, 219),
        text_muted: Color32::from_rgb(136, 143, 152),
        accent: Color32::from_rgb(46, 134, 193),
        success: Color32::from_rgb(104, 180, 138),
        warning: Color32::from_rgb(214, 160, 92),
        error: Color32::from_rgb(208, 106, 106),
    }
}

/// Apply the dashboard look to egui's visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    style_widget(&mut visuals.widgets.inactive, palette);
    style_widget(&mut visuals.widgets.hovered, palette);
    style_widget(&mut visuals.widgets.active, palette);
    style_widget(&mut visuals.widgets.open, palette);
}

fn style_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(2);
    vis.bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Severity tone for the footer badge and banners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing in flight.
    Idle,
    /// Neutral progress information.
    Info,
    /// Last action completed.
    Success,
    /// Degraded but usable.
    Warning,
    /// Something failed.
    Error,
}

/// Badge color for a status tone.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Info => palette.accent,
        StatusTone::Success => palette.success,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.error,
    }
}

/// Badge label for a status tone.
pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Info => "Info",
        StatusTone::Success => "OK",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

/// Dimmed fill used behind warning and error banners.
pub fn banner_fill(tone: StatusTone) -> Color32 {
    let color = status_badge_color(tone);
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 26)
}

/// Outline stroke used around banners.
pub fn banner_stroke(tone: StatusTone) -> Stroke {
    Stroke::new(1.0, status_badge_color(tone))
}
