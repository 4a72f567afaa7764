//! Room Header Component
//!
//! The bar inside a room: title, kind badge, member count, countdown,
//! connection state and the leave button.

use eframe::egui;

use crate::egui_app::channel::ChannelStatus;
use crate::egui_app::room::countdown::Countdown;
use crate::egui_app::theme::colors;
use crate::shared::room::Room;

/// Render the in-room header; true means the user asked to leave
pub fn render(
    ui: &mut egui::Ui,
    room: &Room,
    countdown: &Countdown,
    active_count: usize,
    is_host: bool,
    status: &ChannelStatus,
) -> bool {
    let mut exit_clicked = false;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&room.title)
                .color(colors::TEXT_PRIMARY)
                .size(17.0)
                .strong(),
        );
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new(room.kind.label()).size(11.0),
        );
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("{}/{}", active_count, room.max_member),
        );
        if is_host {
            ui.colored_label(
                colors::HOST_BADGE,
                egui::RichText::new("HOST").size(11.0).strong(),
            );
        }

        match status {
            ChannelStatus::Connecting => {
                ui.spinner();
            }
            ChannelStatus::Retrying => {
                ui.colored_label(colors::WARNING, "Reconnecting...");
            }
            ChannelStatus::Error(message) => {
                ui.colored_label(colors::ERROR, "⚠")
                    .on_hover_text(message.clone());
            }
            ChannelStatus::Connected | ChannelStatus::Disconnected => {}
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Leave").clicked() {
                exit_clicked = true;
            }

            let urgent = countdown.remaining_seconds() <= 60;
            let color = if urgent {
                colors::COUNTDOWN_URGENT
            } else {
                colors::TEXT_PRIMARY
            };
            ui.label(
                egui::RichText::new(format!("⏱ {}", countdown.display()))
                    .color(color)
                    .size(15.0)
                    .strong(),
            );
        });
    });

    exit_clicked
}
