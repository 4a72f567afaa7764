//! Room Card Component
//!
//! One room in the lobby grid: title, kind, keywords, occupancy and
//! the creator. The whole card is one click target; full or closed
//! rooms render dimmed and ignore clicks.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::room::Room;

/// Render one lobby card; true when the user clicked a joinable room
pub fn render(ui: &mut egui::Ui, room: &Room) -> bool {
    let full = room.participants >= room.max_member;
    let joinable = room.is_open() && !full;

    let inner = styles::room_card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&room.title)
                    .color(if joinable {
                        colors::TEXT_PRIMARY
                    } else {
                        colors::TEXT_SECONDARY
                    })
                    .size(15.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(room.kind.label()).size(11.0),
                );
            });
        });

        ui.horizontal_wrapped(|ui| {
            for keyword in &room.keywords {
                ui.label(
                    egui::RichText::new(format!("#{}", keyword))
                        .color(colors::CHIP_TEXT)
                        .size(11.0),
                );
            }
        });

        ui.horizontal(|ui| {
            let occupancy_color = if full {
                colors::ERROR
            } else {
                colors::TEXT_SECONDARY
            };
            ui.colored_label(
                occupancy_color,
                format!("{}/{}", room.participants, room.max_member),
            );
            ui.colored_label(colors::TEXT_SECONDARY, format!("{} min", room.duration));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(&room.nickname).size(11.0),
                );
                if !room.is_open() {
                    ui.colored_label(colors::ERROR, egui::RichText::new("closed").size(11.0));
                } else if full {
                    ui.colored_label(colors::WARNING, egui::RichText::new("full").size(11.0));
                }
            });
        });
    });

    let response = inner.response.interact(egui::Sense::click());
    if joinable && response.hovered() {
        ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }
    joinable && response.clicked()
}
