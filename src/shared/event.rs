//! Realtime Event System
//!
//! This module defines the two closed event unions that travel over the
//! room channel and the `{"event", "data"}` envelope that carries them.
//!
//! # Boundary validation
//!
//! Incoming frames are parsed in two steps: envelope first, then the
//! payload against the variant named by `event`. Unknown event names
//! and payloads that fail to parse are protocol errors; they are
//! reported to the caller and never reach view state. There is no
//! fallback to untyped payloads.
//!
//! # Direction
//!
//! `ServerEvent` is everything the server pushes; `ClientEvent` is
//! everything the client emits. The unions are intentionally separate:
//! neither side ever echoes the other's frames verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::board::{BoardSection, KanbanCard, Stage};
use super::error::SharedError;
use super::member::Member;
use super::message::Message;
use super::room::Room;

/// The wire envelope, both directions
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Value,
}

/// Everything the server pushes to a joined client
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Room metadata pushed once after join
    RoomInfo(Room),
    /// Full message history replay, once after join
    PreviousMessages(Vec<Message>),
    /// Full member list replay, once after join
    PreviousMembers(Vec<Member>),
    /// Keyword list replay, once after join
    PreviousKeywords(Vec<String>),
    /// Authoritative member list replacement
    MemberUpdate(Vec<Member>),
    /// One appended chat message
    Message(Message),
    /// Authoritative keyword list replacement
    KeywordUpdate(Vec<String>),
    /// Authoritative board replacement
    BoardUpdate(Vec<BoardSection>),
    /// Board replay, once after join
    PreviousBoardData(Vec<BoardSection>),
    /// Answer to `getRoomInfo`
    RealRoom(Room),
    /// Room metadata changed
    RoomUpdated(Room),
    /// The server closed the room; terminal
    ServerRoomClosed,
    /// Authoritative remaining seconds, overrides the local countdown
    TimeRemaining(i64),
    /// Answer to `keywordClick`: where the keyword first appears
    KeywordLocation { keyword: String, message_id: i64 },
}

#[derive(Debug, Clone, Deserialize)]
struct KeywordLocationData {
    keyword: String,
    #[serde(rename = "messageId")]
    message_id: i64,
}

impl ServerEvent {
    /// Parse one incoming text frame
    ///
    /// Every malformed case maps to `SharedError::ProtocolError` with
    /// enough context to log; the caller discards the frame.
    pub fn parse(frame: &str) -> Result<Self, SharedError> {
        let envelope: Envelope = serde_json::from_str(frame)
            .map_err(|e| SharedError::protocol(format!("Bad envelope: {}", e)))?;
        Self::from_envelope(&envelope.event, envelope.data)
    }

    fn from_envelope(event: &str, data: Value) -> Result<Self, SharedError> {
        fn payload<T: serde::de::DeserializeOwned>(
            event: &str,
            data: Value,
        ) -> Result<T, SharedError> {
            serde_json::from_value(data)
                .map_err(|e| SharedError::protocol(format!("Bad payload for '{}': {}", event, e)))
        }

        match event {
            "roomInfo" => Ok(Self::RoomInfo(payload(event, data)?)),
            "previousMessages" => Ok(Self::PreviousMessages(payload(event, data)?)),
            "previousMembers" => Ok(Self::PreviousMembers(payload(event, data)?)),
            "previousKeywords" => Ok(Self::PreviousKeywords(payload(event, data)?)),
            "memberUpdate" => Ok(Self::MemberUpdate(payload(event, data)?)),
            "message" => Ok(Self::Message(payload(event, data)?)),
            "keywordUpdate" => Ok(Self::KeywordUpdate(payload(event, data)?)),
            "boardUpdate" => Ok(Self::BoardUpdate(payload(event, data)?)),
            "previousBoardData" => Ok(Self::PreviousBoardData(payload(event, data)?)),
            "realRoom" => Ok(Self::RealRoom(payload(event, data)?)),
            "roomUpdated" => Ok(Self::RoomUpdated(payload(event, data)?)),
            "serverRoomClosed" => Ok(Self::ServerRoomClosed),
            "timeRemaining" => Ok(Self::TimeRemaining(payload(event, data)?)),
            "keywordLocation" => {
                let located: KeywordLocationData = payload(event, data)?;
                Ok(Self::KeywordLocation {
                    keyword: located.keyword,
                    message_id: located.message_id,
                })
            }
            other => Err(SharedError::protocol(format!("Unknown event '{}'", other))),
        }
    }

    /// Wire name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoomInfo(_) => "roomInfo",
            Self::PreviousMessages(_) => "previousMessages",
            Self::PreviousMembers(_) => "previousMembers",
            Self::PreviousKeywords(_) => "previousKeywords",
            Self::MemberUpdate(_) => "memberUpdate",
            Self::Message(_) => "message",
            Self::KeywordUpdate(_) => "keywordUpdate",
            Self::BoardUpdate(_) => "boardUpdate",
            Self::PreviousBoardData(_) => "previousBoardData",
            Self::RealRoom(_) => "realRoom",
            Self::RoomUpdated(_) => "roomUpdated",
            Self::ServerRoomClosed => "serverRoomClosed",
            Self::TimeRemaining(_) => "timeRemaining",
            Self::KeywordLocation { .. } => "keywordLocation",
        }
    }
}

/// Everything the client emits
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Announce presence; first frame after connect
    JoinRoom { room_id: String, user_id: i64 },
    /// Send one chat message
    Message {
        room_id: String,
        user_id: i64,
        content: String,
    },
    /// Ask for the authoritative room record
    GetRoomInfo { room_uuid: String },
    /// Remove a keyword (host only, checked server-side too)
    DeleteKeyword {
        room_id: String,
        keyword: String,
        user_id: i64,
    },
    /// Ask where a keyword first appears
    KeywordClick { room_id: String, keyword: String },
    /// Add a card to a stage (only `created` passes the quotas)
    AddCard {
        room_id: String,
        section_id: Stage,
        card: KanbanCard,
    },
    /// Propose the whole board after a host drag
    BoardUpdate {
        room_id: String,
        sections: Vec<BoardSection>,
    },
    /// Request closure: countdown hit zero or no host remains
    RoomClosed { room_id: String },
}

impl ClientEvent {
    /// Wire name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoinRoom { .. } => "joinRoom",
            Self::Message { .. } => "message",
            Self::GetRoomInfo { .. } => "getRoomInfo",
            Self::DeleteKeyword { .. } => "deleteKeyword",
            Self::KeywordClick { .. } => "keywordClick",
            Self::AddCard { .. } => "addCard",
            Self::BoardUpdate { .. } => "boardUpdate",
            Self::RoomClosed { .. } => "roomClosed",
        }
    }

    fn data(&self) -> Result<Value, SharedError> {
        let value = match self {
            Self::JoinRoom { room_id, user_id } => {
                json!({ "roomId": room_id, "userId": user_id })
            }
            Self::Message {
                room_id,
                user_id,
                content,
            } => json!({ "roomId": room_id, "userId": user_id, "content": content }),
            // The payload is the bare uuid string, not an object
            Self::GetRoomInfo { room_uuid } => json!(room_uuid),
            Self::DeleteKeyword {
                room_id,
                keyword,
                user_id,
            } => json!({ "roomId": room_id, "keyword": keyword, "userId": user_id }),
            Self::KeywordClick { room_id, keyword } => {
                json!({ "roomId": room_id, "keyword": keyword })
            }
            Self::AddCard {
                room_id,
                section_id,
                card,
            } => {
                let card = serde_json::to_value(card)?;
                json!({ "roomId": room_id, "sectionId": section_id, "card": card })
            }
            Self::BoardUpdate { room_id, sections } => {
                let sections = serde_json::to_value(sections)?;
                json!({ "roomId": room_id, "sections": sections })
            }
            Self::RoomClosed { room_id } => json!({ "roomId": room_id }),
        };
        Ok(value)
    }

    /// Serialize to one outgoing text frame
    pub fn to_frame(&self) -> Result<String, SharedError> {
        let envelope = Envelope {
            event: self.name().to_string(),
            data: self.data()?,
        };
        Ok(serde_json::to_string(&envelope)?)
    }
}
