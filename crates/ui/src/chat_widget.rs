//! Floating FAQ chat widget.
//!
//! A launcher button bottom-left toggles a small window over the scripted
//! bot from [`site::chatbot`]. Send with the button or Enter.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use site::chatbot::{ChatAuthor, ChatTranscript};

use crate::theme;

/// Widget-local state: whether the window is open and the draft line.
#[derive(Resource, Default)]
pub struct ChatWindow {
    pub open: bool,
    pub draft: String,
}

pub fn chat_widget_ui(
    mut contexts: EguiContexts,
    mut window: ResMut<ChatWindow>,
    transcript: Option<ResMut<ChatTranscript>>,
) {
    let Some(mut transcript) = transcript else {
        return;
    };
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("chat_launcher"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let label = if window.open { "Chat [v]" } else { "Chat [>]" };
            if ui.button(label).clicked() {
                window.open = !window.open;
            }
        });

    if !window.open {
        return;
    }

    egui::Window::new("DevMeet Helper")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -48.0))
        .default_width(320.0)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(220.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in transcript.lines() {
                        let (who, color) = match line.author {
                            ChatAuthor::Bot => ("bot", theme::TEXT_MUTED),
                            ChatAuthor::User => ("you", theme::ACCENT),
                        };
                        ui.horizontal_wrapped(|ui| {
                            ui.colored_label(color, format!("{who}:"));
                            ui.label(&line.text);
                        });
                        ui.add_space(2.0);
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let edit = ui.add(
                    egui::TextEdit::singleline(&mut window.draft)
                        .desired_width(220.0)
                        .hint_text("Ask a question..."),
                );
                let submitted =
                    edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.button("Send").clicked() || submitted) && !window.draft.trim().is_empty() {
                    let draft = std::mem::take(&mut window.draft);
                    transcript.say(&draft);
                    edit.request_focus();
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_window_starts_closed() {
        let window = ChatWindow::default();
        assert!(!window.open);
        assert!(window.draft.is_empty());
    }
}
