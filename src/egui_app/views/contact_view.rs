use eframe::egui;

use crate::egui_app::api::contact::InquiryType;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Column width for the contact form
const FORM_WIDTH: f32 = 460.0;

/// Contact form: name, email, inquiry type and message
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(FORM_WIDTH);
                ui.add_space(24.0);

                ui.label(
                    egui::RichText::new("Contact us")
                        .size(22.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Questions, bug reports, anything.")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(12.0);

                render_form(ui, state);
                ui.add_space(24.0);
            });
        });
}

fn render_form(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(egui::RichText::new("Name").color(colors::TEXT_SECONDARY));
        ui.add(egui::TextEdit::singleline(&mut state.contact_name));
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
        ui.add(egui::TextEdit::singleline(&mut state.contact_email));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Topic").color(colors::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt("contact_inquiry_picker")
                .selected_text(state.contact_inquiry.label())
                .show_ui(ui, |ui| {
                    for inquiry in InquiryType::ALL {
                        ui.selectable_value(&mut state.contact_inquiry, inquiry, inquiry.label());
                    }
                });
        });
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Message").color(colors::TEXT_SECONDARY));
        ui.add(
            egui::TextEdit::multiline(&mut state.contact_message)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        if let Some(error) = &state.contact_error {
            ui.colored_label(colors::ERROR, error);
            ui.add_space(8.0);
        }
        if state.contact_sent {
            ui.colored_label(colors::SUCCESS, "Message sent. We'll get back to you.");
            ui.add_space(8.0);
        }

        if state.contact_sending() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Sending...").color(colors::TEXT_SECONDARY));
            });
        } else if ui
            .add(
                egui::Button::new(egui::RichText::new("Send").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT),
            )
            .clicked()
        {
            state.submit_contact();
        }
    });
}
