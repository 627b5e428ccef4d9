//! About page: mission text and the leadership carousel.

use bevy_egui::egui;

use site::catalog::MemberRoster;

use crate::carousel::{self, AutoScroll, LEADER_CARD_HEIGHT, LEADER_CARD_WIDTH};
use crate::theme;

pub(crate) fn render(ui: &mut egui::Ui, roster: &MemberRoster, scroll: &mut AutoScroll) {
    ui.add_space(16.0);
    ui.heading("About DevMeet");
    ui.separator();
    ui.label(
        "DevMeet started in a borrowed conference room with eleven people \
         and a projector that only did 800x600. Today we're a few hundred \
         engineers, designers, and the occasionally curious — meeting twice \
         a month to swap war stories and learn from each other.",
    );
    ui.add_space(8.0);
    ui.label(
        "No tickets, no sales pitches. Speakers come from the community, \
         and first-time talks get the warmest room in town.",
    );

    ui.add_space(24.0);
    ui.heading("Leadership");
    ui.label(
        egui::RichText::new("Hover a card to pause the strip and take a closer look.")
            .color(theme::TEXT_MUTED),
    );
    ui.add_space(8.0);

    carousel::carousel_strip(
        ui,
        "leader_strip",
        scroll,
        roster.leaders.len(),
        LEADER_CARD_WIDTH,
        |ui, index| {
            let leader = &roster.leaders[index];
            carousel::hover_card(ui, LEADER_CARD_WIDTH, LEADER_CARD_HEIGHT, |ui| {
                ui.label(
                    egui::RichText::new(&leader.name)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );
                ui.colored_label(theme::ACCENT, &leader.title);
                ui.colored_label(theme::TEXT_MUTED, &leader.focus);
            })
        },
    );
}
