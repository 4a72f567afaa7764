//! Room Membership
//!
//! Members are room-scoped and ephemeral. The server pushes the full
//! member list whenever it changes; the client never edits a list, it
//! replaces it wholesale. Exactly one member is host at a time; if the
//! host leaves, the server either promotes someone or the room closes.

use serde::{Deserialize, Serialize};

/// Role of a member within one room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Elevated privileges: move cards, delete keywords
    Host,
    /// Everyone else
    Guest,
}

/// One entry in a server-pushed member list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// Matches `User::id` for the session-identity check
    pub user_id: i64,
    pub nickname: String,
    #[serde(default)]
    pub job: String,
    /// Avatar URL
    #[serde(default)]
    pub profile: Option<String>,
    pub role: MemberRole,
    /// Set when the member left but the server keeps the row for
    /// message attribution
    #[serde(default)]
    pub is_deleted: bool,
}

impl Member {
    pub fn is_host(&self) -> bool {
        self.role == MemberRole::Host
    }

    /// Present and counted toward the room's live membership
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}
