//! Mock REST server helpers

use wiremock::MockServer;
use xfrooms::egui_app::config::Config;
use xfrooms::shared::config::AppConfig;

/// Config pointed at the mock server, no token
pub fn test_config(server: &MockServer) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.uri())).expect("test config")
}

/// Config pointed at the mock server with a session token set
pub fn authed_config(server: &MockServer) -> Config {
    let mut config = test_config(server);
    config.set_token(Some("test-token".to_string()));
    config
}

/// Run a blocking API call off the tokio test runtime, the same way
/// the app does (each REST call gets its own thread)
pub fn call_blocking<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::spawn(f).join().expect("API thread panicked")
}
