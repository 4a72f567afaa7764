use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;

pub mod admin_view;
pub mod board_room_view;
pub mod chat_room_view;
pub mod contact_view;
pub mod lobby_view;
pub mod login_view;
pub mod profile_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("⏱ XFRooms").size(18.0).strong(),
                );

                // The room views own navigation; leaving goes through
                // the exit confirm, so the tabs hide while inside one
                if state.session.authenticated && state.room.is_none() {
                    ui.add_space(16.0);
                    nav_button(ui, state, "Lobby", AppView::Lobby);
                    nav_button(ui, state, "Profile", AppView::Profile);
                    nav_button(ui, state, "Contact", AppView::Contact);
                    if state.session.is_admin() {
                        nav_button(ui, state, "Admin", AppView::Admin);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if state.session.authenticated {
                        if state.room.is_none() && ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(user) = &state.session.user {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.nickname));
                        }
                    }
                });
            });
        });
}

fn nav_button(ui: &mut egui::Ui, state: &mut AppState, label: &str, view: AppView) {
    let active = state.current_view == view;
    let text = egui::RichText::new(label).color(if active {
        colors::TEXT_LIGHT
    } else {
        colors::BORDER
    });
    if ui.add(egui::Button::new(text).frame(false)).clicked() && !active {
        match view {
            AppView::Lobby => state.go_lobby(),
            AppView::Profile => state.go_profile(),
            AppView::Contact => state.go_contact(),
            AppView::Admin => state.go_admin(),
            _ => state.current_view = view,
        }
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::new()
        .fill(colors::APP_BG)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Login => login_view::render(ui, state),
            AppView::Lobby => lobby_view::render(ui, state),
            AppView::ChatRoom => chat_room_view::render(ui, state),
            AppView::BoardRoom => board_room_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
            AppView::Admin => admin_view::render(ui, state),
            AppView::Contact => contact_view::render(ui, state),
        });
}
