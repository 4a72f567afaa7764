use chrono::Utc;
use eframe::egui;

use crate::egui_app::components::keyword_chips::KeywordAction;
use crate::egui_app::components::{
    input_bar, keyword_chips, member_list, message_block, modal, room_header,
};
use crate::egui_app::room::RoomState;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::shared::message::starts_group;

/// Member panel width in pixels
const MEMBER_PANEL_WIDTH: f32 = 200.0;

/// The chat room: keyword strip, message list, input bar, members
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
                    render_chat_column(ui, room, now);
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

fn render_chat_column(ui: &mut egui::Ui, room: &mut RoomState, now: chrono::DateTime<Utc>) {
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

    let is_host = room.is_host();
    let pending = room.chat.lookup_pending().map(|l| l.keyword.clone());
    let action = keyword_chips::render(ui, &room.room.keywords, is_host, pending.as_deref());
    match action {
        Some(KeywordAction::Clicked(keyword)) => room.click_keyword(&keyword, now),
        Some(KeywordAction::Deleted(keyword)) => room.delete_keyword(&keyword),
        None => {}
    }

    render_notices(ui, room);

    // Reserve room for the input bar below the scroll area
    let list_height = ui.available_height() - 56.0;
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), list_height),
        egui::Layout::top_down(egui::Align::LEFT),
        |ui| {
            render_messages(ui, room);
        },
    );

    if input_bar::render(ui, &mut room.chat.input, !room.closed) {
        room.send_chat();
    }
}

fn render_notices(ui: &mut egui::Ui, room: &mut RoomState) {
    if let Some(notice) = room.notice.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(colors::WARNING, notice);
            if ui.add(egui::Button::new("✕").frame(false)).clicked() {
                room.notice = None;
            }
        });
    }
    if let Some(notice) = room.chat.notice.clone() {
        ui.colored_label(colors::ERROR, notice);
    }
}

fn render_messages(ui: &mut egui::Ui, room: &mut RoomState) {
    let my_id = room.user.id;
    let scroll_target = room.chat.take_scroll_target();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(scroll_target.is_none())
        .show(ui, |ui| {
            ui.add_space(8.0);

            if room.chat.messages.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.colored_label(colors::TEXT_SECONDARY, "No messages yet. Say hello!");
                });
                return;
            }

            for (index, message) in room.chat.messages.iter().enumerate() {
                let is_mine = !message.is_system() && message.user_id == my_id;
                let show_author =
                    !is_mine && !message.is_system() && starts_group(&room.chat.messages, index);
                let highlighted = room.chat.is_highlighted(message.id);

                let response = message_block::render(ui, message, is_mine, show_author, highlighted);
                if scroll_target == Some(message.id) {
                    response.scroll_to_me(Some(egui::Align::TOP));
                }
                ui.add_space(2.0);
            }
            ui.add_space(8.0);
        });
}

/// Exit confirm plus the terminal closed notice; true means leave
pub fn render_room_modals(ui: &mut egui::Ui, room: &mut RoomState) -> bool {
    if room.closed {
        return modal::notice(
            ui.ctx(),
            "room_closed_modal",
            "Room closed",
            "This room has ended. Thanks for joining!",
            "Back to lobby",
        );
    }

    if room.show_exit_confirm {
        match modal::confirm(
            ui.ctx(),
            "exit_room_modal",
            "Leave this room?",
            "You can rejoin from the lobby while it is still open.",
            "Leave",
            "Stay",
        ) {
            Some(modal::ModalChoice::Confirm) => {
                room.show_exit_confirm = false;
                return true;
            }
            Some(modal::ModalChoice::Cancel) => room.show_exit_confirm = false,
            None => {}
        }
    }
    false
}
