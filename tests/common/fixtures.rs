//! JSON fixtures in the server's wire shapes

use serde_json::{json, Value};
use xfrooms::shared::user::User;

pub fn room_json(id: i64, uuid: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "uuid": uuid,
        "title": format!("Room {}", id),
        "type": kind,
        "participants": 1,
        "max_member": 4,
        "duration": 10,
        "status": "open",
        "keywords": ["demo"],
        "user_id": 7,
        "nickname": "alice",
        "createdAt": "2024-08-15T10:00:00Z"
    })
}

pub fn user_json(id: i64, nickname: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}@example.com", nickname),
        "nickname": nickname,
        "job": "designer",
        "role": "user"
    })
}

pub fn member_json(user_id: i64, nickname: &str, role: &str) -> Value {
    json!({
        "user_id": user_id,
        "nickname": nickname,
        "job": "",
        "role": role,
        "is_deleted": false
    })
}

pub fn message_json(id: i64, user_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "nickname": format!("user{}", user_id),
        "content": content,
        "created_at": "2024-08-15T10:01:00Z"
    })
}

/// Wrap a payload into the channel's `{event, data}` envelope
pub fn envelope(event: &str, data: Value) -> Value {
    json!({ "event": event, "data": data })
}

pub fn sample_user(id: i64, nickname: &str) -> User {
    serde_json::from_value(user_json(id, nickname)).expect("user fixture")
}
