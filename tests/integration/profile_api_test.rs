//! Profile REST client tests

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xfrooms::egui_app::api::profile::ProfileApiClient;
use xfrooms::shared::room::RoomKind;

use crate::common::{authed_config, call_blocking, test_config, user_json};

#[tokio::test]
async fn test_update_profile_returns_fresh_user() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/update"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(json!({"nickname": "newname", "job": "writer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(7, "newname")))
        .expect(1)
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let user =
        call_blocking(move || ProfileApiClient::new(config).update_profile("newname", "writer"))
            .unwrap();
    assert_eq!(user.nickname, "newname");
}

#[tokio::test]
async fn test_update_profile_nickname_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/update"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let err = call_blocking(move || ProfileApiClient::new(config).update_profile("taken", ""))
        .unwrap_err();
    assert_eq!(err, "That nickname is already taken");
}

#[tokio::test]
async fn test_update_profile_requires_token() {
    let server = MockServer::start().await;
    let config = test_config(&server);
    let err = call_blocking(move || ProfileApiClient::new(config).update_profile("name", ""))
        .unwrap_err();
    assert_eq!(err, "Not authenticated");
}

#[tokio::test]
async fn test_room_history_parses_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/room-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 3,
                "title": "Retro",
                "type": "kanban",
                "duration": 15,
                "createdAt": "2024-08-14T09:00:00Z"
            },
            {
                "id": 4,
                "title": "Standup",
                "type": "chat",
                "duration": 5,
                "createdAt": "2024-08-15T09:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let history = call_blocking(move || ProfileApiClient::new(config).room_history()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, RoomKind::Board);
    assert_eq!(history[1].duration, 5);
}
