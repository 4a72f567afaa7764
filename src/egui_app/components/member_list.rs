//! Member List Component
//!
//! The side panel listing everyone in the room, with the host marked
//! and the session user tagged. Deleted members are hidden here; their
//! names survive on their messages.

use eframe::egui;

use crate::egui_app::room::members::MemberTracker;
use crate::egui_app::theme::colors;

/// Render the member panel
pub fn render(ui: &mut egui::Ui, members: &MemberTracker, session_user_id: i64, capacity: u32) {
    ui.label(
        egui::RichText::new(format!("Members ({}/{})", members.active_count(), capacity))
            .color(colors::TEXT_PRIMARY)
            .strong(),
    );
    ui.separator();

    for member in members.active() {
        ui.horizontal(|ui| {
            let initial = member
                .nickname
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();
            egui::Frame::new()
                .fill(colors::CHIP_BG)
                .corner_radius(egui::CornerRadius::same(9))
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(initial)
                            .color(colors::CHIP_TEXT)
                            .size(12.0)
                            .strong(),
                    );
                });

            let name = if member.user_id == session_user_id {
                format!("{} (you)", member.nickname)
            } else {
                member.nickname.clone()
            };
            ui.colored_label(colors::TEXT_PRIMARY, name);

            if !member.job.is_empty() {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(&member.job).size(11.0),
                );
            }

            if member.is_host() {
                ui.colored_label(
                    colors::HOST_BADGE,
                    egui::RichText::new("HOST").size(10.0).strong(),
                );
            }
        });
        ui.add_space(2.0);
    }
}
