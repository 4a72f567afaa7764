//! Admin REST client tests

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xfrooms::egui_app::api::admin::{full_year_series, AdminApiClient};
use xfrooms::shared::user::Role;

use crate::common::{authed_config, call_blocking};

#[tokio::test]
async fn test_list_users_parses_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "email": "alice@example.com",
                "nickname": "alice",
                "job": "designer",
                "role": "admin",
                "createdAt": "2024-01-03T08:00:00Z"
            },
            {
                "id": 2,
                "email": "bob@example.com",
                "nickname": "bob",
                "createdAt": "2024-03-20T08:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let users = call_blocking(move || AdminApiClient::new(config).list_users()).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, Role::Admin);
    // Missing job/role fall back to defaults
    assert_eq!(users[1].job, "");
    assert_eq!(users[1].role, Role::User);
}

#[tokio::test]
async fn test_list_users_forbidden_for_non_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let err = call_blocking(move || AdminApiClient::new(config).list_users()).unwrap_err();
    assert_eq!(err, "Admin privileges required");
}

#[tokio::test]
async fn test_delete_user_hits_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/users/42"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = authed_config(&server);
    call_blocking(move || AdminApiClient::new(config).delete_user(42)).unwrap();
}

#[tokio::test]
async fn test_delete_missing_user() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/users/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let err = call_blocking(move || AdminApiClient::new(config).delete_user(99)).unwrap_err();
    assert_eq!(err, "User not found");
}

#[tokio::test]
async fn test_signup_chart_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/available-years"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([2023, 2024])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/monthly-signups/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"month": 2, "count": 5},
            {"month": 8, "count": 11}
        ])))
        .mount(&server)
        .await;

    let config = authed_config(&server);
    let (years, signups) = call_blocking(move || {
        let client = AdminApiClient::new(config);
        let years = client.available_years()?;
        let signups = client.monthly_signups(2024)?;
        Ok::<_, String>((years, signups))
    })
    .unwrap();

    assert_eq!(years, vec![2023, 2024]);
    let series = full_year_series(&signups);
    assert_eq!(series[1], 5);
    assert_eq!(series[7], 11);
    assert_eq!(series.iter().filter(|&&c| c > 0).count(), 2);
}
