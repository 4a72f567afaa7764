//! Room Records
//!
//! This module defines the Room struct as the lobby endpoint returns it,
//! plus the creation request the client submits. Field names follow the
//! server's JSON, which mixes snake_case with a camelCase `createdAt`.
//!
//! Rooms are addressed two ways: a numeric database id and an opaque
//! `uuid` string. Everything realtime (join, events) uses the uuid; the
//! numeric id only appears in REST payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SharedError;
use super::keyword::is_valid_keyword;
use super::limits;

/// Which board a room opens into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomKind {
    /// Chat board with keyword index
    #[serde(rename = "chat")]
    Chat,
    /// Kanban idea board
    #[serde(rename = "kanban")]
    Board,
}

impl RoomKind {
    /// Label shown on lobby cards and badges
    pub fn label(&self) -> &'static str {
        match self {
            RoomKind::Chat => "Chat",
            RoomKind::Board => "Board",
        }
    }
}

/// Room lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Open,
    Closed,
}

/// A room record as served by `GET /main`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Server-assigned numeric id
    pub id: i64,
    /// Opaque globally-unique id used by the realtime channel
    pub uuid: String,
    /// Room title, 2-20 characters
    pub title: String,
    /// Chat or kanban board
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Current member count
    #[serde(default)]
    pub participants: u32,
    /// Member cap chosen at creation
    pub max_member: u32,
    /// Session length in minutes
    pub duration: u32,
    /// Open until the countdown or the host ends it
    pub status: RoomStatus,
    /// Up to three keywords, stored bare (no `#`)
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Creating user's id
    pub user_id: i64,
    /// Creating user's nickname, for lobby display
    #[serde(default)]
    pub nickname: String,
    /// Creation timestamp; the countdown anchors here
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Seconds this room lives for in total
    pub fn duration_seconds(&self) -> i64 {
        i64::from(self.duration) * 60
    }

    pub fn is_open(&self) -> bool {
        self.status == RoomStatus::Open
    }
}

/// Body of `POST /main`
///
/// The client generates the uuid so it can navigate into the room
/// without waiting for the response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoomRequest {
    pub uuid: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub max_member: u32,
    pub duration: u32,
    pub keywords: Vec<String>,
}

impl CreateRoomRequest {
    /// Validate all fields against the shared limits
    ///
    /// Returns the first violation found so the form can mark the
    /// offending field. The request must not be sent on `Err`.
    pub fn validate(&self) -> Result<(), SharedError> {
        let title_chars = self.title.chars().count();
        if title_chars < limits::TITLE_MIN_CHARS || title_chars > limits::TITLE_MAX_CHARS {
            return Err(SharedError::validation(
                "title",
                format!(
                    "Title must be {}-{} characters",
                    limits::TITLE_MIN_CHARS,
                    limits::TITLE_MAX_CHARS
                ),
            ));
        }
        if self.max_member < limits::CAPACITY_MIN || self.max_member > limits::CAPACITY_MAX {
            return Err(SharedError::validation(
                "max_member",
                format!(
                    "Capacity must be {}-{} members",
                    limits::CAPACITY_MIN,
                    limits::CAPACITY_MAX
                ),
            ));
        }
        if self.duration < limits::DURATION_MIN_MINUTES
            || self.duration > limits::DURATION_MAX_MINUTES
        {
            return Err(SharedError::validation(
                "duration",
                format!(
                    "Duration must be {}-{} minutes",
                    limits::DURATION_MIN_MINUTES,
                    limits::DURATION_MAX_MINUTES
                ),
            ));
        }
        if self.keywords.len() > limits::KEYWORDS_MAX {
            return Err(SharedError::validation(
                "keywords",
                format!("At most {} keywords", limits::KEYWORDS_MAX),
            ));
        }
        for keyword in &self.keywords {
            if !is_valid_keyword(keyword) {
                return Err(SharedError::validation(
                    "keywords",
                    format!("Invalid keyword '{}'", keyword),
                ));
            }
        }
        Ok(())
    }
}
