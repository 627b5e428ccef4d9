//! Community page: the member showcase carousel.

use bevy_egui::egui;

use site::catalog::MemberRoster;

use crate::carousel::{self, AutoScroll, MEMBER_CARD_HEIGHT, MEMBER_CARD_WIDTH};
use crate::theme;

pub(crate) fn render(ui: &mut egui::Ui, roster: &MemberRoster, scroll: &mut AutoScroll) {
    ui.add_space(16.0);
    ui.heading("Our community");
    ui.label(
        egui::RichText::new(
            "Some of the regulars who make DevMeet what it is. Hover to pause.",
        )
        .color(theme::TEXT_MUTED),
    );
    ui.add_space(12.0);

    carousel::carousel_strip(
        ui,
        "member_strip",
        scroll,
        roster.members.len(),
        MEMBER_CARD_WIDTH,
        |ui, index| {
            let member = &roster.members[index];
            carousel::hover_card(ui, MEMBER_CARD_WIDTH, MEMBER_CARD_HEIGHT, |ui| {
                ui.label(
                    egui::RichText::new(&member.name)
                        .strong()
                        .color(theme::TEXT_HEADING),
                );
                ui.colored_label(theme::ACCENT, format!("{} @ {}", member.role, member.company));
                ui.colored_label(theme::TEXT_MUTED, &member.blurb);
            })
        },
    );

    ui.add_space(24.0);
    ui.heading("Get involved");
    ui.separator();
    ui.label("Give a lightning talk — five minutes, any topic, zero pressure.");
    ui.label("Join the mentoring circle, as a mentor or a mentee.");
    ui.label("Help at the welcome desk and meet every newcomer first.");
}
