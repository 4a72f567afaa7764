/**
 * Chat Message Data Structure
 *
 * This module defines the Message struct used for room chat messages
 * and their serialization for the realtime channel.
 *
 * Messages arrive in server order and are append-only on the client.
 * The author fields are denormalized (nickname, job, profile) so the
 * client can render history without a member lookup, including authors
 * who have since left the room.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::limits::MESSAGE_MAX_CHARS;

/// Author id the server uses for its own announcements
pub const SYSTEM_AUTHOR_ID: i64 = 0;

/// A single chat message as pushed over the channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Server-assigned id
    #[serde(default)]
    pub id: i64,
    /// Authoring user, or `SYSTEM_AUTHOR_ID`
    pub user_id: i64,
    /// Author display fields, denormalized at send time
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub job: String,
    /// Author avatar URL
    #[serde(default)]
    pub profile: Option<String>,
    /// Message text, at most 80 characters for user messages
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Server announcement rather than a user message
    pub fn is_system(&self) -> bool {
        self.user_id == SYSTEM_AUTHOR_ID
    }
}

/// Check outgoing text before emission: non-empty after trim and
/// within the length cap. Returns the trimmed text to send.
pub fn prepare_outgoing(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MESSAGE_MAX_CHARS {
        return None;
    }
    Some(trimmed.to_string())
}

/// A message starts a new avatar group iff it is the first message or
/// its author differs from the one immediately before it. System
/// messages never group with user messages.
pub fn starts_group(messages: &[Message], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    match (messages.get(index), messages.get(index - 1)) {
        (Some(current), Some(previous)) => current.user_id != previous.user_id,
        _ => true,
    }
}
