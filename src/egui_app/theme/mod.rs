//! Theme Module
//!
//! This module provides the color scheme and styling for the rooms
//! application. It includes:
//!
//! - Color constants for the pink/berry theme
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for various UI components
//!
//! # Usage
//!
//! ```no_run
//! use eframe::egui;
//! use xfrooms::egui_app::theme::styles;
//!
//! let ctx = egui::Context::default();
//! styles::apply_global_theme(&ctx);
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
