//! Color Constants for the Room Theme
//!
//! This module defines all the color constants used throughout the
//! rooms UI. Colors follow a warm pink/berry scheme: light pink panels,
//! berry accents and a yellow flash for located keywords.

use eframe::egui::Color32;

/// App background - Blush white
pub const APP_BG: Color32 = Color32::from_rgb(0xFD, 0xF2, 0xF8);

/// Side panels (member list, keyword strip) - Soft pink
pub const PANEL_BG: Color32 = Color32::from_rgb(0xFC, 0xE7, 0xF3);

/// Top bar background - Berry
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x9D, 0x2B, 0x50);

/// Card and modal surfaces - White
pub const SURFACE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Borders on light surfaces - Pink
pub const BORDER: Color32 = Color32::from_rgb(0xFB, 0xCF, 0xE8);

/// Accent for primary actions - Coral red
pub const ACCENT: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

/// Accent hover - Deeper coral
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Own message bubble - Light coral
pub const BUBBLE_MINE: Color32 = Color32::from_rgb(0xFE, 0xE2, 0xE2);

/// Other members' bubbles - White
pub const BUBBLE_OTHER: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Bubble border - Pink
pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(0xFB, 0xCF, 0xE8);

/// Keyword flash on a located message - Yellow
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xFE, 0xF0, 0x8A);

/// Keyword chips - Rose
pub const CHIP_BG: Color32 = Color32::from_rgb(0xF9, 0xA8, 0xD4);

/// Keyword chip text - Deep berry
pub const CHIP_TEXT: Color32 = Color32::from_rgb(0x83, 0x18, 0x43);

/// System announcements in chat - Muted gray
pub const SYSTEM_TEXT: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Timestamp text color
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x29, 0x25, 0x24);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFD, 0xF2, 0xF8);

/// Host badge - Gold
pub const HOST_BADGE: Color32 = Color32::from_rgb(0xFB, 0xBF, 0x24);

/// Countdown in its final minute - Red
pub const COUNTDOWN_URGENT: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Kanban column background - Soft pink
pub const COLUMN_BG: Color32 = Color32::from_rgb(0xFC, 0xE7, 0xF3);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Input border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xF9, 0xA8, 0xD4);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Hover item background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0xFB, 0xCF, 0xE8);

/// Selected filter tab or page button
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0xF8, 0x71, 0x71);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xF9, 0xA8, 0xD4);

/// Bar chart fill for the signup chart - Berry
pub const CHART_BAR: Color32 = Color32::from_rgb(0xDB, 0x27, 0x77);
