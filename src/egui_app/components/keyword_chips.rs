//! Keyword Chips Component
//!
//! The keyword strip above the chat. Every chip is clickable and jumps
//! to the first message carrying the keyword; hosts additionally get a
//! delete button per chip.

use eframe::egui;

use crate::egui_app::theme::colors;

/// What the user did to the strip this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordAction {
    Clicked(String),
    Deleted(String),
}

/// Render the keyword strip
///
/// `pending` marks the keyword whose location answer is still on its
/// way; that chip gets a spinner.
pub fn render(
    ui: &mut egui::Ui,
    keywords: &[String],
    is_host: bool,
    pending: Option<&str>,
) -> Option<KeywordAction> {
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        if keywords.is_empty() {
            ui.colored_label(
                colors::TEXT_SECONDARY,
                egui::RichText::new("No keywords yet - tag one with #word").size(11.0),
            );
            return;
        }

        for keyword in keywords {
            let chip = egui::Button::new(
                egui::RichText::new(format!("#{}", keyword))
                    .color(colors::CHIP_TEXT)
                    .size(12.0),
            )
            .fill(colors::CHIP_BG)
            .corner_radius(egui::CornerRadius::same(10));

            let response = ui.add(chip).on_hover_text("Jump to first mention");
            if response.clicked() {
                action = Some(KeywordAction::Clicked(keyword.clone()));
            }

            if pending == Some(keyword.as_str()) {
                ui.spinner();
            }

            if is_host {
                let delete = egui::Button::new(
                    egui::RichText::new("✕").color(colors::TEXT_SECONDARY).size(10.0),
                )
                .fill(egui::Color32::TRANSPARENT)
                .frame(false);
                if ui.add(delete).on_hover_text("Remove keyword").clicked() {
                    action = Some(KeywordAction::Deleted(keyword.clone()));
                }
            }

            ui.add_space(4.0);
        }
    });

    action
}
