//! Realtime channel tests against a scripted room server

use std::time::{Duration, Instant};

use serde_json::json;

use xfrooms::egui_app::channel::{ChannelStatus, RoomChannel};
use xfrooms::egui_app::config::Config;
use xfrooms::shared::config::AppConfig;
use xfrooms::shared::event::{ClientEvent, ServerEvent};

use crate::common::{envelope, ScriptedRoomServer};

const WAIT: Duration = Duration::from_secs(5);

fn channel_config(server: &ScriptedRoomServer) -> Config {
    Config::with_builder(AppConfig::builder().ws_url(server.ws_url())).expect("valid config")
}

/// Poll the channel until `want` events arrived or the timeout passed
fn collect_events(channel: &RoomChannel, want: usize, timeout: Duration) -> Vec<ServerEvent> {
    let deadline = Instant::now() + timeout;
    let mut events = Vec::new();
    while events.len() < want && Instant::now() < deadline {
        events.extend(channel.poll_events());
        std::thread::sleep(Duration::from_millis(10));
    }
    events
}

/// Poll until the channel reports the wanted status
fn wait_for_status(channel: &RoomChannel, wanted: ChannelStatus, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if channel.poll_status() == Some(wanted.clone()) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn test_connect_announces_join() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = channel_config(&server);
    let _channel = RoomChannel::connect(&config, "room-1", 7);

    let join = server.wait_for_event("joinRoom", WAIT).expect("join frame");
    assert_eq!(join["data"]["roomId"], "room-1");
    assert_eq!(join["data"]["userId"], 7);
}

#[test]
fn test_scripted_events_arrive_in_order() {
    let server = ScriptedRoomServer::start(vec![
        envelope("previousKeywords", json!(["demo", "retro"])),
        envelope("timeRemaining", json!(120)),
    ]);
    let config = channel_config(&server);
    let channel = RoomChannel::connect(&config, "room-1", 7);

    let events = collect_events(&channel, 2, WAIT);
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        ServerEvent::PreviousKeywords(vec!["demo".to_string(), "retro".to_string()])
    );
    assert_eq!(events[1], ServerEvent::TimeRemaining(120));
}

#[test]
fn test_send_reaches_server() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = channel_config(&server);
    let channel = RoomChannel::connect(&config, "room-1", 7);
    assert!(wait_for_status(&channel, ChannelStatus::Connected, WAIT));

    channel
        .send(ClientEvent::Message {
            room_id: "room-1".to_string(),
            user_id: 7,
            content: "hello".to_string(),
        })
        .unwrap();

    let frame = server.wait_for_event("message", WAIT).expect("message frame");
    assert_eq!(frame["data"]["content"], "hello");
    assert_eq!(frame["data"]["roomId"], "room-1");
}

#[test]
fn test_malformed_frames_are_discarded() {
    let server = ScriptedRoomServer::start(vec![
        json!({"event": "poke", "data": {}}),
        json!({"event": "memberUpdate", "data": {"not": "a list"}}),
        envelope("timeRemaining", json!(60)),
    ]);
    let config = channel_config(&server);
    let channel = RoomChannel::connect(&config, "room-1", 7);

    // Only the valid frame survives the boundary
    let events = collect_events(&channel, 1, WAIT);
    assert_eq!(events, vec![ServerEvent::TimeRemaining(60)]);
    assert!(channel.poll_events().is_empty());
}

#[test]
fn test_status_reaches_connected() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = channel_config(&server);
    let channel = RoomChannel::connect(&config, "room-1", 7);
    assert!(wait_for_status(&channel, ChannelStatus::Connected, WAIT));
}

#[test]
fn test_unreachable_server_keeps_retrying() {
    // Bind and drop a listener to get a port nothing answers on
    let dead_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = Config::with_builder(
        AppConfig::builder().ws_url(format!("ws://127.0.0.1:{}", dead_port)),
    )
    .unwrap();

    let channel = RoomChannel::connect(&config, "room-1", 7);
    assert!(wait_for_status(&channel, ChannelStatus::Retrying, WAIT));
    // Dropping mid-retry must not hang the caller
    drop(channel);
}

#[test]
fn test_drop_closes_cleanly() {
    let server = ScriptedRoomServer::start(vec![]);
    let config = channel_config(&server);
    let channel = RoomChannel::connect(&config, "room-1", 7);
    assert!(server.wait_for_event("joinRoom", WAIT).is_some());

    drop(channel);
    // The server side sees the close, not a stray frame
    assert!(server.recv_frame(Duration::from_millis(500)).is_none());
}
