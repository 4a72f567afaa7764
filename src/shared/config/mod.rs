//! Application configuration module
//!
//! Provides configuration types for the application: REST base URL,
//! realtime channel URL and the request timeout. Values come from an
//! optional TOML file with env-var and built-in fallbacks applied by
//! the client wrapper.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// REST base URL
    pub server_url: Option<String>,
    /// Realtime channel URL
    pub ws_url: Option<String>,
    /// REST request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

/// On-disk shape of the config file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    server_url: Option<String>,
    ws_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&raw)?;
        let config = Self {
            server_url: file.server_url,
            ws_url: file.ws_url,
            request_timeout_secs: file.request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if let Some(url) = &self.ws_url {
            if !url.starts_with("ws://") && !url.starts_with("wss://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::MissingValue("request_timeout_secs"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    ws_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl AppConfigBuilder {
    /// Set the REST base URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the realtime channel URL
    pub fn ws_url(mut self, url: String) -> Self {
        self.ws_url = Some(url);
        self
    }

    /// Set the REST request timeout
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            ws_url: self.ws_url,
            request_timeout_secs: self.request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("cannot read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
