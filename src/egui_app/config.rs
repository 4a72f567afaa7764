use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use std::path::PathBuf;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
/// Default realtime channel URL
const DEFAULT_WS_URL: &str = "ws://127.0.0.1:3000/ws";
/// Default REST timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration wrapper.
///
/// Resolution order: config file if present, then `XFROOMS_API_URL` /
/// `XFROOMS_WS_URL` env overrides, then compiled defaults. The session
/// token lives here so every REST client sees the same value; it is
/// never persisted.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let app = Self::load_file()
            .unwrap_or_default();
        let mut config = Self { app, token: None };
        config.apply_env();
        config
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// `~/.config/xfrooms/config.toml`, when it exists
    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xfrooms").join("config.toml"))
    }

    fn load_file() -> Option<AppConfig> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return None;
        }
        match AppConfig::from_file(&path) {
            Ok(app) => {
                tracing::info!("[CONFIG] Loaded {}", path.display());
                Some(app)
            }
            Err(e) => {
                tracing::warn!("[CONFIG] Ignoring {}: {}", path.display(), e);
                None
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("XFROOMS_API_URL") {
            self.app.server_url = Some(url);
        }
        if let Ok(url) = std::env::var("XFROOMS_WS_URL") {
            self.app.ws_url = Some(url);
        }
    }

    /// Set the session token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Realtime channel URL
    pub fn ws_url(&self) -> &str {
        self.app.ws_url.as_deref().unwrap_or(DEFAULT_WS_URL)
    }

    /// REST request timeout
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.app.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> Config {
        // Bypass file/env resolution so tests are hermetic
        Config {
            app: AppConfig::default(),
            token: None,
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = bare_config();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        assert_eq!(config.ws_url(), "ws://127.0.0.1:3000/ws");
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_set_token() {
        let mut config = bare_config();
        config.set_token(Some("test_token".to_string()));
        assert_eq!(config.get_token(), Some(&"test_token".to_string()));
    }

    #[test]
    fn test_clear_token() {
        let mut config = bare_config();
        config.set_token(Some("test_token".to_string()));
        config.clear_token();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_api_url() {
        let config = bare_config();
        let url = config.api_url("/api/auth/user");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/user");
    }

    #[test]
    fn test_with_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://10.0.0.2:8080".to_string())
                .ws_url("ws://10.0.0.2:8080/ws".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_url("/main"), "http://10.0.0.2:8080/main");
        assert_eq!(config.ws_url(), "ws://10.0.0.2:8080/ws");
    }
}
