//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the room server. These types are used for serialization
//! and communication over REST and the realtime channel.
//!
//! # Overview
//!
//! Everything protocol-visible lives here: the data model (users, rooms,
//! members, messages, keywords, board), the validation limits both sides
//! agree on, and the closed event unions that travel over the channel.

/// User identity and privilege tier
pub mod user;

/// Room records and creation requests
pub mod room;

/// Room membership and roles
pub mod member;

/// Chat message data structure
pub mod message;

/// Keyword extraction and validation
pub mod keyword;

/// Kanban board sections and cards
pub mod board;

/// Realtime event unions and wire envelope
pub mod event;

/// Validation limits shared with the server
pub mod limits;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use user::{Role, User};
pub use room::{Room, RoomKind, RoomStatus};
pub use member::{Member, MemberRole};
pub use message::Message;
pub use board::{BoardSection, KanbanCard, Stage};
pub use event::{ClientEvent, ServerEvent};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
