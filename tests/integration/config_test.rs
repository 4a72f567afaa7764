//! Configuration loading tests

use assert_matches::assert_matches;
use serial_test::serial;

use xfrooms::egui_app::config::Config;
use xfrooms::shared::config::{AppConfig, ConfigError};

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
server_url = "https://rooms.example.com"
ws_url = "wss://rooms.example.com/ws"
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.server_url.as_deref(), Some("https://rooms.example.com"));
    assert_eq!(config.ws_url.as_deref(), Some("wss://rooms.example.com/ws"));
    assert_eq!(config.request_timeout_secs, Some(30));
}

#[test]
fn test_config_file_partial_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "server_url = \"http://10.0.0.5:3000\"\n").unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.server_url.as_deref(), Some("http://10.0.0.5:3000"));
    assert!(config.ws_url.is_none());
}

#[test]
fn test_config_file_rejects_bad_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ws_url = \"http://rooms.example.com/ws\"\n").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert_matches!(err, ConfigError::InvalidUrl(_));
}

#[test]
fn test_config_file_rejects_broken_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "server_url = http://no-quotes\n").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert_matches!(err, ConfigError::Parse(_));
}

#[test]
#[serial]
fn test_env_overrides_win() {
    std::env::set_var("XFROOMS_API_URL", "http://env-host:9000");
    std::env::set_var("XFROOMS_WS_URL", "ws://env-host:9000/ws");

    let config = Config::new();
    assert_eq!(config.server_url(), "http://env-host:9000");
    assert_eq!(config.ws_url(), "ws://env-host:9000/ws");

    std::env::remove_var("XFROOMS_API_URL");
    std::env::remove_var("XFROOMS_WS_URL");
}
