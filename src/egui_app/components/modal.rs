//! Modal Dialogs
//!
//! Centered confirm/notice windows. Callers keep a `bool` flag for
//! whether the modal is open and close it on the returned choice.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};

/// What the user picked in a confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Confirm,
    Cancel,
}

/// Two-button confirmation dialog; `None` while still open
pub fn confirm(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    body: &str,
    confirm_label: &str,
    cancel_label: &str,
) -> Option<ModalChoice> {
    let mut choice = None;
    egui::Window::new(egui::RichText::new(title).size(16.0).strong())
        .id(egui::Id::new(id))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(body).color(colors::TEXT_SECONDARY));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new(confirm_label).color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::ACCENT),
                    )
                    .clicked()
                {
                    choice = Some(ModalChoice::Confirm);
                }
                if ui.button(cancel_label).clicked() {
                    choice = Some(ModalChoice::Cancel);
                }
            });
        });
    choice
}

/// Single-button notice dialog; true once the user dismissed it
pub fn notice(ctx: &egui::Context, id: &str, title: &str, body: &str, button_label: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new(egui::RichText::new(title).size(16.0).strong())
        .id(egui::Id::new(id))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(body).color(colors::TEXT_SECONDARY));
            ui.add_space(12.0);
            if ui
                .add(
                    egui::Button::new(egui::RichText::new(button_label).color(colors::TEXT_LIGHT))
                        .fill(colors::ACCENT),
                )
                .clicked()
            {
                dismissed = true;
            }
        });
    dismissed
}
