use eframe::egui;

use crate::egui_app::components::{pagination, room_card};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::limits;
use crate::shared::room::{Room, RoomKind};

/// The lobby: filterable, paginated grid of open rooms
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Frame::new()
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            render_header(ui, state);
            ui.add_space(8.0);
            render_filter_tabs(ui, state);
            ui.add_space(12.0);

            if let Some(error) = state.lobby_error.clone() {
                ui.horizontal(|ui| {
                    ui.colored_label(colors::ERROR, error);
                    if ui.button("Retry").clicked() {
                        state.refresh_rooms();
                    }
                });
                ui.add_space(8.0);
            }

            render_room_grid(ui, state);
        });

    if state.show_create_modal {
        render_create_modal(ui, state);
    }
}

fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Rooms")
                .size(22.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(
                    egui::Button::new(
                        egui::RichText::new("+ Create room").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT),
                )
                .clicked()
            {
                state.open_create_modal();
            }
            if ui
                .add_enabled(!state.lobby_loading, egui::Button::new("🔄"))
                .on_hover_text("Refresh")
                .clicked()
            {
                state.refresh_rooms();
            }
            if state.lobby_loading {
                ui.spinner();
            }
        });
    });
}

fn render_filter_tabs(ui: &mut egui::Ui, state: &mut AppState) {
    let mut filter = state.lobby_filter;
    ui.horizontal(|ui| {
        ui.selectable_value(&mut filter, None, "All");
        ui.selectable_value(&mut filter, Some(RoomKind::Chat), "Chat");
        ui.selectable_value(&mut filter, Some(RoomKind::Board), "Board");
    });
    if filter != state.lobby_filter {
        state.set_lobby_filter(filter);
    }
}

fn render_room_grid(ui: &mut egui::Ui, state: &mut AppState) {
    let total = state.filtered_rooms().len();
    if total == 0 {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            if state.lobby_loading {
                ui.spinner();
            } else {
                ui.colored_label(colors::TEXT_SECONDARY, "No rooms yet - create one!");
            }
        });
        return;
    }

    let pages = pagination::page_count(total, limits::LOBBY_PAGE_SIZE);
    let page = state.lobby_page.min(pages - 1);
    let page_rooms: Vec<Room> = state
        .filtered_rooms()
        .into_iter()
        .skip(page * limits::LOBBY_PAGE_SIZE)
        .take(limits::LOBBY_PAGE_SIZE)
        .cloned()
        .collect();

    let mut clicked: Option<Room> = None;
    ui.columns(2, |columns| {
        for (i, room) in page_rooms.iter().enumerate() {
            let column = &mut columns[i % 2];
            if room_card::render(column, room) {
                clicked = Some(room.clone());
            }
            column.add_space(8.0);
        }
    });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        if let Some(new_page) = pagination::render(ui, page, pages) {
            state.lobby_page = new_page;
        }
    });

    if let Some(room) = clicked {
        state.enter_room(room);
    }
}

fn render_create_modal(ui: &mut egui::Ui, state: &mut AppState) {
    egui::Window::new(egui::RichText::new("Create a room").size(16.0).strong())
        .id(egui::Id::new("create_room_modal"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .show(ui.ctx(), |ui| {
            ui.set_min_width(320.0);

            ui.label(egui::RichText::new("Title").color(colors::TEXT_SECONDARY));
            ui.add(
                egui::TextEdit::singleline(&mut state.create_title)
                    .char_limit(limits::TITLE_MAX_CHARS)
                    .hint_text("What are we deciding?"),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{}/{}",
                    state.create_title.chars().count(),
                    limits::TITLE_MAX_CHARS
                ))
                .size(10.0)
                .color(colors::TIMESTAMP),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Type").color(colors::TEXT_SECONDARY));
                ui.selectable_value(&mut state.create_kind, RoomKind::Chat, "Chat");
                ui.selectable_value(&mut state.create_kind, RoomKind::Board, "Board");
            });
            ui.add_space(8.0);

            ui.add(
                egui::Slider::new(
                    &mut state.create_capacity,
                    limits::CAPACITY_MIN..=limits::CAPACITY_MAX,
                )
                .text("members"),
            );
            ui.add(
                egui::Slider::new(
                    &mut state.create_duration,
                    limits::DURATION_MIN_MINUTES..=limits::DURATION_MAX_MINUTES,
                )
                .text("minutes"),
            );
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(format!("Keywords (up to {})", limits::KEYWORDS_MAX))
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add(
                egui::TextEdit::singleline(&mut state.create_keywords).hint_text("#coffee #retro"),
            );
            ui.add_space(8.0);

            if let Some(error) = &state.create_error {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                if state.creating_room() {
                    ui.spinner();
                    ui.label(egui::RichText::new("Creating...").color(colors::TEXT_SECONDARY));
                } else {
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Create").color(colors::TEXT_LIGHT),
                            )
                            .fill(colors::ACCENT),
                        )
                        .clicked()
                    {
                        state.submit_create_room();
                    }
                    if ui.button("Cancel").clicked() {
                        state.show_create_modal = false;
                    }
                }
            });
        });
}
