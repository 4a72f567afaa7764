use eframe::egui;

use crate::egui_app::session;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

/// Browser-based login: show the login URL, accept the code back
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    let login_url = session::login_page_url(&state.config);

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 340.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("⏱ XFRooms")
                .size(32.0)
                .strong()
                .color(colors::TOP_BAR_BG),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Timed rooms for quick decisions")
                .size(14.0)
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(24.0);

        if let Some(error) = &state.session.error {
            ui.colored_label(colors::ERROR, error);
            ui.add_space(10.0);
        }

        ui.label(
            egui::RichText::new("Log in with Google in your browser:").color(colors::TEXT_PRIMARY),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let url_width = 300.0;
            ui.add_space((available_rect.width() - url_width - 70.0).max(0.0) / 2.0);
            ui.add_sized(
                [url_width, 24.0],
                egui::Label::new(
                    egui::RichText::new(&login_url)
                        .monospace()
                        .size(12.0)
                        .color(colors::ACCENT_HOVER),
                )
                .truncate(),
            );
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(login_url.clone());
            }
        });
        ui.add_space(16.0);

        ui.label(
            egui::RichText::new("Then paste the code the page shows you:")
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let input_width = 240.0;
            ui.add_space((available_rect.width() - input_width - 90.0).max(0.0) / 2.0);
            let response = ui.add_sized(
                [input_width, 28.0],
                egui::TextEdit::singleline(&mut state.login_code_input).hint_text("Login code"),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let button = ui.add_sized(
                [80.0, 28.0],
                egui::Button::new(egui::RichText::new("Log in").color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT),
            );
            if (submitted || button.clicked()) && !state.session.loading {
                state.handle_login();
            }
        });

        ui.add_space(16.0);
        if state.session.loading {
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                ui.spinner();
                ui.label(egui::RichText::new("Checking...").color(colors::TEXT_SECONDARY));
            });
        } else if ui
            .add(egui::Button::new(
                egui::RichText::new("Logged in already? Check again")
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            ))
            .clicked()
        {
            state.fetch_identity();
        }
    });
}
