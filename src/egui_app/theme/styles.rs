//! Theme Styling Functions
//!
//! This module provides helper functions for applying the pink/berry
//! color scheme consistently across all UI components.

use super::colors;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::SURFACE;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::APP_BG;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::PANEL_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for side panels (members, keyword strip)
pub fn side_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for the chat scroll area
pub fn chat_area_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::APP_BG)
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for the message input bar
pub fn input_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::INPUT_BG)
        .stroke(Stroke::new(1.0, colors::INPUT_BORDER))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for a chat message bubble
///
/// `highlighted` paints the keyword-location flash over the normal
/// fill for the second it lasts.
pub fn bubble_frame(is_mine: bool, highlighted: bool) -> egui::Frame {
    let fill = if highlighted {
        colors::HIGHLIGHT
    } else if is_mine {
        colors::BUBBLE_MINE
    } else {
        colors::BUBBLE_OTHER
    };
    let tail = if is_mine {
        CornerRadius {
            nw: 12,
            ne: 12,
            sw: 12,
            se: 4,
        }
    } else {
        CornerRadius {
            nw: 12,
            ne: 12,
            sw: 4,
            se: 12,
        }
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::BUBBLE_BORDER))
        .corner_radius(tail)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for one kanban column
pub fn column_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::COLUMN_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for one kanban card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 8))
}

/// Create a frame style for a lobby room card
pub fn room_card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .stroke(Stroke::new(2.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Create a frame for a keyword chip
pub fn chip_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CHIP_BG)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 3))
}

/// Get the text color for dark backgrounds
pub fn text_on_dark() -> Color32 {
    colors::TEXT_LIGHT
}

/// Get the text color for light backgrounds
pub fn text_on_light() -> Color32 {
    colors::TEXT_PRIMARY
}
