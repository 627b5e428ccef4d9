//! Top navigation shell.
//!
//! One button per route; the active route is highlighted. While a page
//! transition is loading the buttons are disabled: nothing behind the
//! loader may be interactive, and that includes queueing another
//! navigation from a half-dismantled page.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::route::Route;
use site::transition::PageTransition;

use crate::theme;

pub fn nav_bar_ui(
    mut contexts: EguiContexts,
    route: Res<State<Route>>,
    mut next_route: ResMut<NextState<Route>>,
    transition: Option<Res<PageTransition>>,
) {
    let loading = transition.as_ref().map_or(false, |t| t.is_loading());
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("DevMeet")
                    .size(20.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.separator();

            for &target in Route::ALL {
                let active = *route.get() == target;
                let response =
                    ui.add_enabled(!loading, egui::SelectableLabel::new(active, target.label()));
                if response.clicked() && !active {
                    next_route.set(target);
                }
            }
        });
    });
}
