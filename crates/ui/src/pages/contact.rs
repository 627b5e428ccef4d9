//! Contact / signup form page.

use bevy::prelude::*;
use bevy_egui::egui;

use site::contact::{ContactForm, SubmitContact};

use crate::theme;

const FIELD_WIDTH: f32 = 340.0;

fn field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED));
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(FIELD_WIDTH)
            .char_limit(120),
    );
    ui.add_space(8.0);
}

pub(crate) fn render(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    submit: &mut EventWriter<SubmitContact>,
) {
    ui.add_space(16.0);
    ui.heading("Join DevMeet");
    ui.label(
        egui::RichText::new(
            "Drop your details and we'll add you to the newsletter — \
             one email per month, events only.",
        )
        .color(theme::TEXT_MUTED),
    );
    ui.separator();
    ui.add_space(8.0);

    field(ui, "Name", &mut form.name);
    field(ui, "Email", &mut form.email);
    field(ui, "LinkedIn (optional)", &mut form.linkedin);
    field(ui, "Role (optional)", &mut form.role);

    ui.label(egui::RichText::new("Anything else?").color(theme::TEXT_MUTED));
    ui.add(
        egui::TextEdit::multiline(&mut form.message)
            .desired_width(FIELD_WIDTH)
            .desired_rows(4),
    );
    ui.add_space(12.0);

    let label = if form.sending { "Sending..." } else { "Send" };
    let button = ui.add_enabled(
        !form.sending,
        egui::Button::new(label).min_size(egui::vec2(140.0, 32.0)),
    );
    if button.clicked() {
        submit.send(SubmitContact);
    }
}
