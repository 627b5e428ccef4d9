//! Landing page: hero banner and the next-events strip.

use bevy_egui::egui;

use site::catalog::EventCatalog;

use crate::theme;

pub(crate) fn render(ui: &mut egui::Ui, catalog: &EventCatalog) {
    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("DevMeet")
                .size(52.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("The local meetup for people who build software")
                .size(18.0)
                .color(theme::TEXT_MUTED),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Talks · workshops · hack days · job board")
                .size(14.0)
                .color(theme::TEXT_MUTED),
        );
    });

    ui.add_space(36.0);
    ui.heading("Next up");
    ui.separator();
    for event in catalog.events.iter().take(3) {
        super::events::event_row(ui, event);
    }
}
