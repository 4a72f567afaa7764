//! Message Block Component
//!
//! Displays one chat message. Consecutive messages by the same author
//! group under a single author line; system announcements render
//! centered and muted. The returned response is what the keyword
//! scroll targets.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::message::Message;

/// Render one message; `show_author` is true at group starts
pub fn render(
    ui: &mut egui::Ui,
    message: &Message,
    is_mine: bool,
    show_author: bool,
    highlighted: bool,
) -> egui::Response {
    if message.is_system() {
        let inner = ui.vertical_centered(|ui| {
            ui.colored_label(
                colors::SYSTEM_TEXT,
                egui::RichText::new(&message.content).italics().size(12.0),
            );
        });
        ui.add_space(4.0);
        return inner.response;
    }

    let align = if is_mine {
        egui::Align::RIGHT
    } else {
        egui::Align::LEFT
    };

    let inner = ui.with_layout(egui::Layout::top_down(align), |ui| {
        let max_width = ui.available_width() * 0.7;

        ui.allocate_ui_with_layout(
            egui::vec2(max_width, 0.0),
            egui::Layout::top_down(align),
            |ui| {
                if show_author && !is_mine {
                    ui.horizontal(|ui| {
                        avatar(ui, &message.nickname);
                        ui.label(
                            egui::RichText::new(&message.nickname)
                                .color(colors::TEXT_PRIMARY)
                                .strong()
                                .size(13.0),
                        );
                        if !message.job.is_empty() {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                egui::RichText::new(&message.job).size(11.0),
                            );
                        }
                    });
                }

                styles::bubble_frame(is_mine, highlighted).show(ui, |ui| {
                    ui.label(egui::RichText::new(&message.content).color(colors::TEXT_PRIMARY));
                    if let Some(created_at) = message.created_at {
                        ui.colored_label(
                            colors::TIMESTAMP,
                            egui::RichText::new(
                                created_at
                                    .with_timezone(&chrono::Local)
                                    .format("%H:%M")
                                    .to_string(),
                            )
                            .size(10.0),
                        );
                    }
                });
            },
        );
    });

    ui.add_space(4.0);
    inner.response
}

/// Initial-letter avatar; remote images stay on the web client
fn avatar(ui: &mut egui::Ui, nickname: &str) {
    let initial = nickname.chars().next().unwrap_or('?').to_uppercase().to_string();
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
}
