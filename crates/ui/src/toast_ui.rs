//! Toast popups.
//!
//! Renders the [`site::toasts::ToastLog`] as a stack of dismissible
//! colored frames anchored bottom-right.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::toasts::{ToastKind, ToastLog};

fn kind_color(kind: ToastKind) -> egui::Color32 {
    match kind {
        ToastKind::Success => egui::Color32::from_rgb(90, 210, 120),
        ToastKind::Error => egui::Color32::from_rgb(245, 95, 90),
        ToastKind::Info => egui::Color32::from_rgb(120, 170, 245),
    }
}

fn kind_icon(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "[+]",
        ToastKind::Error => "[!]",
        ToastKind::Info => "[i]",
    }
}

pub fn toast_ui(mut contexts: EguiContexts, mut log: ResMut<ToastLog>) {
    if log.is_empty() {
        return;
    }

    let mut dismiss_id: Option<u64> = None;

    egui::Area::new(egui::Id::new("toast_stack"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut(), |ui| {
            for toast in log.iter() {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 235))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(
                                kind_color(toast.kind),
                                format!("{} {}", kind_icon(toast.kind), toast.text),
                            );
                            if ui.small_button("x").clicked() {
                                dismiss_id = Some(toast.id);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismiss_id {
        log.dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors_distinct() {
        let colors = [
            kind_color(ToastKind::Success),
            kind_color(ToastKind::Error),
            kind_color(ToastKind::Info),
        ];
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j], "toast colors must be distinct");
            }
        }
    }

    #[test]
    fn test_kind_icons_distinct() {
        let icons = [
            kind_icon(ToastKind::Success),
            kind_icon(ToastKind::Error),
            kind_icon(ToastKind::Info),
        ];
        for i in 0..icons.len() {
            for j in (i + 1)..icons.len() {
                assert_ne!(icons[i], icons[j], "toast icons must be distinct");
            }
        }
    }
}
