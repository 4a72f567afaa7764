use chrono::Local;
use eframe::egui;

use crate::egui_app::components::modal;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::limits;

/// Column width for the profile form
const FORM_WIDTH: f32 = 460.0;

/// Profile: nickname/job editing plus the room history
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(FORM_WIDTH);
                ui.add_space(24.0);

                ui.label(
                    egui::RichText::new("Profile")
                        .size(22.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(12.0);

                render_form(ui, state);
                ui.add_space(24.0);
                render_history(ui, state);
                ui.add_space(24.0);
            });
        });

    if state.show_profile_confirm {
        match modal::confirm(
            ui.ctx(),
            "profile_confirm_modal",
            "Update profile?",
            "Your nickname is visible to everyone in your rooms.",
            "Save",
            "Cancel",
        ) {
            Some(modal::ModalChoice::Confirm) => {
                state.show_profile_confirm = false;
                state.save_profile();
            }
            Some(modal::ModalChoice::Cancel) => state.show_profile_confirm = false,
            None => {}
        }
    }
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        if let Some(user) = &state.session.user {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
                ui.label(egui::RichText::new(&user.email).color(colors::TEXT_PRIMARY));
            });
            ui.add_space(8.0);
        }

        ui.label(egui::RichText::new("Nickname").color(colors::TEXT_SECONDARY));
        ui.add(
            egui::TextEdit::singleline(&mut state.profile_nickname)
                .char_limit(limits::NICKNAME_MAX_CHARS),
        );
        ui.label(
            egui::RichText::new(format!(
                "{}/{}",
                state.profile_nickname.chars().count(),
                limits::NICKNAME_MAX_CHARS
            ))
            .size(10.0)
            .color(colors::TIMESTAMP),
        );
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Job").color(colors::TEXT_SECONDARY));
        ui.add(egui::TextEdit::singleline(&mut state.profile_job).char_limit(limits::JOB_MAX_CHARS));
        ui.label(
            egui::RichText::new(format!(
                "{}/{}",
                state.profile_job.chars().count(),
                limits::JOB_MAX_CHARS
            ))
            .size(10.0)
            .color(colors::TIMESTAMP),
        );
        ui.add_space(12.0);

        if let Some(error) = &state.profile_error {
            ui.colored_label(colors::ERROR, error);
            ui.add_space(8.0);
        }
        if state.profile_saved {
            ui.colored_label(colors::SUCCESS, "Profile updated");
            ui.add_space(8.0);
        }

        ui.horizontal(|ui| {
            if state.profile_saving() {
                ui.spinner();
                ui.label(egui::RichText::new("Saving...").color(colors::TEXT_SECONDARY));
            } else if ui
                .add_enabled(
                    state.profile_dirty(),
                    egui::Button::new(egui::RichText::new("Save").color(colors::TEXT_LIGHT))
                        .fill(colors::ACCENT),
                )
                .clicked()
            {
                state.profile_saved = false;
                state.show_profile_confirm = true;
            }
        });
    });
}

fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Recent rooms")
                .size(16.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        if state.history_loading {
            ui.spinner();
        }
    });
    ui.add_space(8.0);

    if state.history.is_empty() {
        if !state.history_loading {
            ui.colored_label(colors::TEXT_SECONDARY, "No rooms yet");
        }
        return;
    }

    for entry in &state.history {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&entry.title)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(entry.kind.label())
                        .size(11.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(
                            entry
                                .created_at
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M")
                                .to_string(),
                        )
                        .size(11.0)
                        .color(colors::TIMESTAMP),
                    );
                    ui.label(
                        egui::RichText::new(format!("{} min", entry.duration))
                            .size(11.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
        });
        ui.add_space(6.0);
    }
}
