//! XFRooms - Main Library
//!
//! XFRooms is a native desktop client for timed collaboration rooms,
//! combining room-based chat with a kanban-style idea board. Rooms are
//! short-lived sessions with a host, a member cap, and a countdown; the
//! server owns all room state and the client mirrors what it pushes.
//!
//! # Overview
//!
//! This library provides the full client:
//! - Realtime room channel (WebSocket) with typed, validated events
//! - Host/guest role tracking from server-pushed member lists
//! - Room countdown with one-shot milestone notifications
//! - Chat with keyword index and scroll-to-message
//! - Kanban board with stage quotas and host-only drag moves
//! - Lobby, profile, admin and contact surfaces over REST
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared with the server
//!   - Room/member/message/board data model and validation limits
//!   - The closed realtime event unions and their wire envelope
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session and REST clients
//!   - Per-room channel thread and state bundle
//!   - Views, components, theme
//!
//! # Concurrency
//!
//! The UI is single-threaded immediate mode. Network work happens on
//! background threads (one per room channel, one per in-flight REST
//! call) and reaches the UI only through `std::sync::mpsc` channels
//! drained with `try_recv` each frame.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
