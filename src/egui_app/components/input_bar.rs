//! Input Bar Component
//!
//! The message input bar at the bottom of the chat area: a single line
//! hard-capped at the message limit, a live character counter and a
//! send button. Returns true when the user asked to send.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::limits::MESSAGE_MAX_CHARS;

/// Render the input bar; true means "send the draft now"
pub fn render(ui: &mut egui::Ui, draft: &mut String, enabled: bool) -> bool {
    let mut send_requested = false;

    styles::input_bar_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            let hint = if enabled {
                "Type a message..."
            } else {
                "This room is closed"
            };

            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(draft)
                    .hint_text(hint)
                    .char_limit(MESSAGE_MAX_CHARS)
                    .desired_width(ui.available_width() - 110.0),
            );

            // Send on Enter
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.lost_focus() && enter_pressed && enabled {
                send_requested = true;
                response.request_focus();
            }

            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new(format!("{}/{}", draft.chars().count(), MESSAGE_MAX_CHARS))
                    .size(11.0),
            );

            let send_enabled = enabled && !draft.trim().is_empty();
            ui.add_enabled_ui(send_enabled, |ui| {
                if ui.button("➤").clicked() {
                    send_requested = true;
                }
            });
        });
    });

    send_requested
}
