//! Per-route page renderers.
//!
//! One renderer per [`Route`], all driven by a single system that owns the
//! central panel. The page is not drawn at all while the transition is
//! loading (fully hidden, never dimmed) and
//! fades in under [`PageTransition::reveal_progress`] once revealed.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::catalog::{EventCatalog, JobBoard, MemberRoster};
use site::contact::{ContactForm, SubmitContact};
use site::route::Route;
use site::transition::PageTransition;

use crate::carousel::{LeaderCarousel, MemberCarousel};

pub mod about;
pub mod community;
pub mod contact;
pub mod events;
pub mod home;
pub mod jobs;

#[allow(clippy::too_many_arguments)]
pub fn page_ui(
    mut contexts: EguiContexts,
    route: Res<State<Route>>,
    transition: Option<Res<PageTransition>>,
    catalog: Res<EventCatalog>,
    jobs: Res<JobBoard>,
    roster: Res<MemberRoster>,
    mut member_scroll: ResMut<MemberCarousel>,
    mut leader_scroll: ResMut<LeaderCarousel>,
    mut form: ResMut<ContactForm>,
    mut submit: EventWriter<SubmitContact>,
) {
    let Some(transition) = transition else {
        return;
    };
    if transition.is_loading() {
        return;
    }

    let ctx = contexts.ctx_mut();
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.set_opacity(transition.reveal_progress());
        egui::ScrollArea::vertical().show(ui, |ui| match route.get() {
            Route::Home => home::render(ui, &catalog),
            Route::About => about::render(ui, &roster, &mut leader_scroll.0),
            Route::Events => events::render(ui, &catalog),
            Route::Community => community::render(ui, &roster, &mut member_scroll.0),
            Route::Jobs => jobs::render(ui, &jobs),
            Route::Contact => contact::render(ui, &mut form, &mut submit),
        });
    });
}
