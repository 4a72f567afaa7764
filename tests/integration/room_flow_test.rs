//! Room lifecycle over a live scripted channel
//!
//! These tests drive a full `RoomState` the way the per-frame loop
//! does: `update` with the wall clock until the replay lands, then
//! user actions, asserting on the frames the server side receives.

use std::time::{Duration, Instant};

use chrono::{Duration as ChronoDuration, Utc};
use serde_json::{json, Value};

use xfrooms::egui_app::channel::ChannelStatus;
use xfrooms::egui_app::config::Config;
use xfrooms::egui_app::room::RoomState;
use xfrooms::shared::board::Stage;
use xfrooms::shared::config::AppConfig;
use xfrooms::shared::room::Room;

use crate::common::{
    envelope, member_json, message_json, room_json, sample_user, ScriptedRoomServer,
};

const WAIT: Duration = Duration::from_secs(5);

fn flow_config(server: &ScriptedRoomServer) -> Config {
    Config::with_builder(AppConfig::builder().ws_url(server.ws_url())).expect("valid config")
}

/// A room that started just now, so the countdown stays quiet
fn fresh_room(uuid: &str, kind: &str) -> Room {
    let mut room: Room = serde_json::from_value(room_json(1, uuid, kind)).expect("room fixture");
    room.created_at = Utc::now();
    room
}

fn seeded_board() -> Value {
    json!([
        {
            "id": "created",
            "title": "Created",
            "cards": [
                {
                    "id": "card-1",
                    "content": "idea",
                    "user": {"id": 7, "nickname": "alice", "profile_image": null}
                }
            ]
        },
        {"id": "deliberating", "title": "Deliberating", "cards": []},
        {"id": "adopted", "title": "Adopted", "cards": []}
    ])
}

/// Run the frame loop until the condition holds or the timeout passes
fn pump_until(
    room: &mut RoomState,
    timeout: Duration,
    mut done: impl FnMut(&RoomState) -> bool,
) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        room.update(Utc::now());
        if done(room) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn test_join_replay_fills_room() {
    let server = ScriptedRoomServer::start(vec![
        envelope("roomInfo", room_json(1, "flow-room", "chat")),
        envelope(
            "previousMessages",
            json!([message_json(1, 9, "hi there"), message_json(2, 7, "hello")]),
        ),
        envelope(
            "previousMembers",
            json!([member_json(7, "alice", "host"), member_json(9, "bob", "guest")]),
        ),
        envelope("previousKeywords", json!(["demo", "retro"])),
    ]);
    let config = flow_config(&server);
    let mut room = RoomState::enter(&config, fresh_room("flow-room", "chat"), sample_user(7, "alice"));

    let filled = pump_until(&mut room, WAIT, |r| {
        r.chat.messages.len() == 2 && r.members.active_count() == 2 && r.chat.keywords.len() == 2
    });
    assert!(filled, "replay never arrived");
    assert!(room.is_host());
    assert_eq!(room.status, ChannelStatus::Connected);
    assert_eq!(room.chat.messages[0].content, "hi there");
    assert_eq!(room.room.keywords, vec!["demo", "retro"]);
}

#[test]
fn test_chat_send_travels_the_channel() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = flow_config(&server);
    let mut room = RoomState::enter(&config, fresh_room("flow-room", "chat"), sample_user(7, "alice"));
    assert!(pump_until(&mut room, WAIT, |r| {
        r.status == ChannelStatus::Connected
    }));

    room.chat.input = "hello everyone".to_string();
    room.send_chat();
    assert!(room.chat.input.is_empty());

    let frame = server.wait_for_event("message", WAIT).expect("message frame");
    assert_eq!(frame["data"]["roomId"], "flow-room");
    assert_eq!(frame["data"]["userId"], 7);
    assert_eq!(frame["data"]["content"], "hello everyone");
}

#[test]
fn test_server_close_is_terminal() {
    let server = ScriptedRoomServer::start(vec![envelope("serverRoomClosed", Value::Null)]);
    let config = flow_config(&server);
    let mut room = RoomState::enter(&config, fresh_room("flow-room", "chat"), sample_user(7, "alice"));

    assert!(pump_until(&mut room, WAIT, |r| r.closed));
    // Clocks stopped: a much later frame produces nothing
    room.update(Utc::now() + ChronoDuration::seconds(3600));
    assert!(room.chat.messages.is_empty());
}

#[test]
fn test_countdown_expiry_requests_closure() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = flow_config(&server);
    // 10 minute room, driven past its end with a synthetic clock
    let mut room = RoomState::enter(&config, fresh_room("flow-room", "chat"), sample_user(7, "alice"));
    assert!(pump_until(&mut room, WAIT, |r| {
        r.status == ChannelStatus::Connected
    }));

    let base = Utc::now();
    room.update(base + ChronoDuration::seconds(601));
    assert!(room.countdown.is_expired());
    assert!(room.chat.messages.iter().any(|m| m.content == "Time is up"));

    // The closure request waits out the grace delay, then goes over the wire
    room.update(base + ChronoDuration::seconds(603));
    let frame = server.wait_for_event("roomClosed", WAIT).expect("closure frame");
    assert_eq!(frame["data"]["roomId"], "flow-room");
}

#[test]
fn test_host_drag_proposes_board() {
    let server = ScriptedRoomServer::start(vec![
        envelope("previousMembers", json!([member_json(7, "alice", "host")])),
        envelope("previousBoardData", seeded_board()),
    ]);
    let config = flow_config(&server);
    let mut room = RoomState::enter(
        &config,
        fresh_room("flow-room", "kanban"),
        sample_user(7, "alice"),
    );

    let seeded = pump_until(&mut room, WAIT, |r| {
        r.board.sections[0].cards.len() == 1 && r.is_host()
    });
    assert!(seeded, "board replay never arrived");

    room.move_card("card-1", Stage::Adopted, 0, Utc::now());
    assert_eq!(room.board.sections[2].cards.len(), 1);

    let frame = server.wait_for_event("boardUpdate", WAIT).expect("board frame");
    assert_eq!(frame["data"]["roomId"], "flow-room");
    assert_eq!(frame["data"]["sections"][2]["cards"][0]["id"], "card-1");
    assert_eq!(frame["data"]["sections"][0]["cards"], json!([]));
}
