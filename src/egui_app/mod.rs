//! Native Desktop App
//!
//! The egui/eframe client for XFRooms: a lobby of timed rooms over
//! REST, and a realtime channel per room over WebSocket.
//!
//! # Module Structure
//!
//! - **`config`** - Server URLs, timeouts and the in-memory token
//! - **`session`** - Identity endpoints and the session object
//! - **`api`** - REST clients (rooms, profile, admin, contact)
//! - **`channel`** - Per-room WebSocket thread with typed events
//! - **`room`** - In-room state: members, countdown, chat, board
//! - **`state`** - Central `AppState` driving the views
//! - **`views`** - One module per screen
//! - **`components`** - Reusable widgets (cards, chips, modals)
//! - **`theme`** - Palette and frame styles
//!
//! The UI thread never blocks: REST calls run on spawned threads and
//! report back through `std::sync::mpsc`; the room channel does the
//! same from its own tokio runtime.

pub mod api;
pub mod channel;
pub mod components;
pub mod config;
pub mod room;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use types::{AppView, LoginResponse};
