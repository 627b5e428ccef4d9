//! Community job board.

use bevy_egui::egui;

use site::catalog::JobBoard;

use crate::theme;

pub(crate) fn render(ui: &mut egui::Ui, board: &JobBoard) {
    ui.add_space(16.0);
    ui.heading("Job board");
    ui.label(
        egui::RichText::new(
            "Openings from companies in our community. Listing is free — \
             use the contact form and mention the role.",
        )
        .color(theme::TEXT_MUTED),
    );
    ui.separator();

    if board.postings.is_empty() {
        ui.label("No open roles right now.");
        return;
    }

    for posting in &board.postings {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(&posting.title)
                .size(17.0)
                .strong()
                .color(theme::TEXT_HEADING),
        );
        ui.horizontal(|ui| {
            ui.colored_label(theme::ACCENT, &posting.company);
            ui.colored_label(theme::TEXT_MUTED, "·");
            ui.colored_label(theme::TEXT_MUTED, &posting.location);
        });
        ui.horizontal(|ui| {
            ui.colored_label(theme::TEXT_MUTED, "apply:");
            ui.monospace(&posting.contact);
        });
        ui.add_space(4.0);
        ui.separator();
    }
}
