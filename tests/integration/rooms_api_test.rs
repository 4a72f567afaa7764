//! Lobby REST client tests

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xfrooms::egui_app::api::rooms::RoomsApiClient;
use xfrooms::shared::room::{CreateRoomRequest, RoomKind};

use crate::common::{authed_config, call_blocking, room_json, test_config};

#[tokio::test]
async fn test_list_rooms_parses_server_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            room_json(1, "uuid-1", "chat"),
            room_json(2, "uuid-2", "kanban"),
        ])))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let rooms = call_blocking(move || RoomsApiClient::new(config).list_rooms()).unwrap();

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].uuid, "uuid-1");
    assert_eq!(rooms[1].kind, RoomKind::Board);
}

#[tokio::test]
async fn test_list_rooms_sends_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/main"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let rooms = call_blocking(move || RoomsApiClient::new(config).list_rooms()).unwrap();
    assert!(rooms.is_empty());
}

#[tokio::test]
async fn test_list_rooms_server_error_is_friendly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/main"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = call_blocking(move || RoomsApiClient::new(config).list_rooms()).unwrap_err();
    assert!(err.contains("500"), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_create_room_round_trip() {
    let server = MockServer::start().await;
    let request = CreateRoomRequest {
        uuid: "uuid-new".to_string(),
        title: "Retro".to_string(),
        kind: RoomKind::Board,
        max_member: 4,
        duration: 10,
        keywords: vec!["retro".to_string()],
    };
    Mock::given(method("POST"))
        .and(path("/main"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(201).set_body_json(room_json(9, "uuid-new", "kanban")))
        .expect(1)
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let created =
        call_blocking(move || RoomsApiClient::new(config).create_room(&request)).unwrap();
    assert_eq!(created.uuid, "uuid-new");
    assert_eq!(created.kind, RoomKind::Board);
}

#[tokio::test]
async fn test_create_room_requires_login() {
    let server = MockServer::start().await;
    let request = CreateRoomRequest {
        uuid: "uuid-x".to_string(),
        title: "Standup".to_string(),
        kind: RoomKind::Chat,
        max_member: 4,
        duration: 10,
        keywords: Vec::new(),
    };

    // No token on the config: the client refuses before any request
    let config = test_config(&server);
    let err = call_blocking(move || RoomsApiClient::new(config).create_room(&request)).unwrap_err();
    assert_eq!(err, "Not authenticated");
}

#[tokio::test]
async fn test_create_room_rejection_is_friendly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/main"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let request = CreateRoomRequest {
        uuid: "uuid-x".to_string(),
        title: "Standup".to_string(),
        kind: RoomKind::Chat,
        max_member: 4,
        duration: 10,
        keywords: Vec::new(),
    };
    let config = authed_config(&server);
    let err = call_blocking(move || RoomsApiClient::new(config).create_room(&request)).unwrap_err();
    assert_eq!(err, "The server rejected the room settings");
}
