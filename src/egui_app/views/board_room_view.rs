use chrono::Utc;
use eframe::egui;

use crate::egui_app::components::{member_list, room_header};
use crate::egui_app::room::RoomState;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::egui_app::views::chat_room_view::render_room_modals;
use crate::shared::board::{KanbanCard, Stage};
use crate::shared::limits;

/// Member panel width in pixels
const MEMBER_PANEL_WIDTH: f32 = 200.0;

/// The kanban room: three stage columns, drag-and-drop for the host
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(room) = state.room.as_mut() else {
        state.current_view = AppView::Lobby;
        return;
    };
    let now = Utc::now();
    let available_size = ui.available_size();

    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::vec2(available_size.x - MEMBER_PANEL_WIDTH - 1.0, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::chat_area_frame().show(ui, |ui| {
                    render_board_column(ui, room, now);
                });
            },
        );

        ui.add(egui::Separator::default().vertical());

        ui.allocate_ui_with_layout(
            egui::vec2(MEMBER_PANEL_WIDTH, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::side_panel_frame().show(ui, |ui| {
                    member_list::render(ui, &room.members, room.user.id, room.room.max_member);
                });
            },
        );
    });

    if render_room_modals(ui, room) {
        state.leave_room();
    }
}

fn render_board_column(ui: &mut egui::Ui, room: &mut RoomState, now: chrono::DateTime<Utc>) {
    if room_header::render(
        ui,
        &room.room,
        &room.countdown,
        room.members.active_count(),
        room.is_host(),
        &room.status,
    ) {
        room.show_exit_confirm = true;
    }
    ui.add(egui::Separator::default().horizontal());

    if let Some(notice) = room.notice.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(colors::WARNING, notice);
            if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                room.notice = None;
            }
        });
    }
    if let Some(notice) = room.board.notice.clone() {
        ui.colored_label(colors::ERROR, notice);
    }
    ui.add_space(8.0);

    let is_host = room.is_host();
    let closed = room.closed;
    let column_height = ui.available_height() - 8.0;
    let mut dropped_card: Option<(String, Stage)> = None;

    ui.columns(3, |columns| {
        for (idx, stage) in Stage::ALL.into_iter().enumerate() {
            let ui = &mut columns[idx];
            let (_, dropped) = ui.dnd_drop_zone::<String, ()>(styles::column_frame(), |ui| {
                ui.set_min_height(column_height);
                render_stage(ui, room, stage, is_host, closed, now);
            });
            if let Some(card_id) = dropped {
                dropped_card = Some(((*card_id).clone(), stage));
            }
        }
    });

    if let Some((card_id, to)) = dropped_card {
        // Drops land at the back of the target column
        let index = room
            .board
            .sections
            .iter()
            .find(|s| s.id == to)
            .map_or(0, |s| s.cards.len());
        room.move_card(&card_id, to, index, now);
    }
}

fn render_stage(
    ui: &mut egui::Ui,
    room: &mut RoomState,
    stage: Stage,
    is_host: bool,
    closed: bool,
    now: chrono::DateTime<Utc>,
) {
    let Some(section_idx) = room.board.sections.iter().position(|s| s.id == stage) else {
        return;
    };

    {
        let section = &room.board.sections[section_idx];
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&section.title)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(format!("{}", section.cards.len()))
                    .size(11.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add(egui::Separator::default().horizontal());

        egui::ScrollArea::vertical()
            .id_salt(("board_stage", stage))
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for card in &section.cards {
                    render_card(ui, card, is_host && !closed);
                    ui.add_space(6.0);
                }
            });
    }

    if stage == Stage::Created {
        render_add_card(ui, room, closed, now);
    }
}

fn render_card(ui: &mut egui::Ui, card: &KanbanCard, draggable: bool) {
    let body = |ui: &mut egui::Ui| {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&card.content).color(colors::TEXT_PRIMARY));
            ui.label(
                egui::RichText::new(&card.user.nickname)
                    .size(10.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });
    };

    if draggable {
        let id = egui::Id::new(("board_card", card.id.as_str()));
        ui.dnd_drag_source(id, card.id.clone(), body);
    } else {
        body(ui);
    }
}

fn render_add_card(
    ui: &mut egui::Ui,
    room: &mut RoomState,
    closed: bool,
    now: chrono::DateTime<Utc>,
) {
    if closed {
        return;
    }
    ui.add_space(4.0);

    if room.board.adding {
        let response = ui.add(
            egui::TextEdit::singleline(&mut room.board.input)
                .char_limit(limits::CARD_MAX_CHARS)
                .hint_text("New idea"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.label(
            egui::RichText::new(format!(
                "{}/{}",
                room.board.input.chars().count(),
                limits::CARD_MAX_CHARS
            ))
            .size(10.0)
            .color(colors::TIMESTAMP),
        );
        ui.horizontal(|ui| {
            let can_add = !room.board.input.trim().is_empty();
            if ui
                .add_enabled(
                    can_add,
                    egui::Button::new(egui::RichText::new("Add").color(colors::TEXT_LIGHT))
                        .fill(colors::ACCENT),
                )
                .clicked()
                || (submitted && can_add)
            {
                room.add_card(now);
            }
            if ui.button("Cancel").clicked() {
                room.board.adding = false;
                room.board.input.clear();
            }
        });
    } else if ui.button("+ Add idea").clicked() {
        room.board.adding = true;
    }
}
