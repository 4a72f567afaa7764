//! Contact form REST client tests

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xfrooms::egui_app::api::contact::{ContactApiClient, ContactRequest, InquiryType};

use crate::common::{call_blocking, test_config};

fn sample_request() -> ContactRequest {
    ContactRequest {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        inquiry: InquiryType::Technical,
        message: "Board cards vanish after reconnect".to_string(),
    }
}

#[tokio::test]
async fn test_send_posts_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "type": "technical",
            "message": "Board cards vanish after reconnect"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    call_blocking(move || ContactApiClient::new(config).send(&sample_request())).unwrap();
}

#[tokio::test]
async fn test_send_works_without_login() {
    // The contact form is reachable from the login screen too
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = test_config(&server);
    assert!(config.get_token().is_none());
    call_blocking(move || ContactApiClient::new(config).send(&sample_request())).unwrap();
}

#[tokio::test]
async fn test_send_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err =
        call_blocking(move || ContactApiClient::new(config).send(&sample_request())).unwrap_err();
    assert!(err.contains("500"));
}

#[tokio::test]
async fn test_send_rejects_invalid_form_locally() {
    let server = MockServer::start().await;
    // No mock mounted: an invalid form must never reach the server

    let config = test_config(&server);
    let err = call_blocking(move || {
        let mut request = sample_request();
        request.email = "nope".to_string();
        ContactApiClient::new(config).send(&request)
    })
    .unwrap_err();
    assert_eq!(err, "Enter a valid email address");
}
