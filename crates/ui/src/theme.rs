//! Shared egui style for the site shell.

use bevy_egui::{egui, EguiContexts};

pub const FONT_HEADING: f32 = 22.0;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(92, 200, 170);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(235, 238, 245);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 158, 175);
pub const SPLASH_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(22, 24, 32);

pub fn apply_site_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark slate background with a teal accent.
    let panel = egui::Color32::from_rgb(30, 33, 43);
    let inactive = egui::Color32::from_rgb(44, 48, 60);
    let hover = egui::Color32::from_rgb(62, 72, 90);
    let active = ACCENT;

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(24, 26, 34);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(36, 39, 50);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
