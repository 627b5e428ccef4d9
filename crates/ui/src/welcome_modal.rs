//! Welcome modal window.
//!
//! Renders the auto-opened interstitial from [`site::welcome`] over a
//! semi-transparent backdrop that blocks interaction with the page behind
//! it. "Find an event" jumps to the Events page; both buttons dismiss.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::route::Route;
use site::welcome::WelcomeModal;

use crate::theme;

pub fn welcome_modal_ui(
    mut contexts: EguiContexts,
    modal: Option<ResMut<WelcomeModal>>,
    mut next_route: ResMut<NextState<Route>>,
) {
    let Some(mut modal) = modal else {
        return;
    };
    if !modal.is_open() {
        return;
    }

    let ctx = contexts.ctx_mut();

    // Backdrop to block interaction with the page underneath.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("welcome_modal_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut should_close = false;

    egui::Window::new("welcome_modal")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(360.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 10.0;
                ui.add_space(12.0);

                ui.label(
                    egui::RichText::new("Welcome to DevMeet!")
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );
                ui.add_space(4.0);
                ui.label(
                    "We're the local meetup for people who build software. \
                     Talks, workshops, and a hack day every season — free, \
                     and everyone's welcome.",
                );
                ui.add_space(12.0);

                let button_size = egui::Vec2::new(140.0, 32.0);

                ui.horizontal(|ui| {
                    let total_width = button_size.x * 2.0 + 16.0;
                    let avail = ui.available_width();
                    if avail > total_width {
                        ui.add_space((avail - total_width) / 2.0);
                    }

                    if ui
                        .add_sized(button_size, egui::Button::new("Find an event"))
                        .clicked()
                    {
                        next_route.set(Route::Events);
                        should_close = true;
                    }

                    ui.add_space(16.0);

                    if ui
                        .add_sized(button_size, egui::Button::new("Maybe later"))
                        .clicked()
                    {
                        should_close = true;
                    }
                });

                ui.add_space(12.0);
            });
        });

    if should_close {
        modal.dismiss();
    }
}
