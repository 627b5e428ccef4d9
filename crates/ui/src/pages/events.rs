//! Full upcoming-events listing.

use bevy_egui::egui;

use site::catalog::{EventCatalog, MeetupEvent};

use crate::theme;

pub(crate) fn event_row(ui: &mut egui::Ui, event: &MeetupEvent) {
    ui.add_space(10.0);
    ui.label(
        egui::RichText::new(&event.title)
            .size(17.0)
            .strong()
            .color(theme::TEXT_HEADING),
    );
    ui.horizontal(|ui| {
        ui.colored_label(theme::ACCENT, &event.date);
        ui.colored_label(theme::TEXT_MUTED, "·");
        ui.colored_label(theme::TEXT_MUTED, &event.venue);
    });
    ui.label(&event.blurb);
    ui.horizontal(|ui| {
        for tag in &event.tags {
            ui.small_button(format!("#{tag}")).on_hover_text("event tag");
        }
    });
    ui.add_space(4.0);
    ui.separator();
}

pub(crate) fn render(ui: &mut egui::Ui, catalog: &EventCatalog) {
    ui.add_space(16.0);
    ui.heading("Upcoming events");
    ui.label(
        egui::RichText::new("Free and open to everyone — no registration needed.")
            .color(theme::TEXT_MUTED),
    );
    ui.separator();

    if catalog.events.is_empty() {
        ui.label("Nothing scheduled right now — check back soon.");
        return;
    }
    for event in &catalog.events {
        event_row(ui, event);
    }
}
