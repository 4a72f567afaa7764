//! Profile API Client
//!
//! Nickname/job editing and the room participation history shown on
//! the profile page.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::limits::{JOB_MAX_CHARS, NICKNAME_MAX_CHARS};
use crate::shared::room::RoomKind;
use crate::shared::user::User;

/// Body of `PUT /api/auth/update`
#[derive(Debug, Clone, Serialize)]
struct UpdateProfileRequest {
    nickname: String,
    job: String,
}

/// One room the user has taken part in
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RoomHistoryEntry {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub duration: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Check profile fields before submission
pub fn validate_profile(nickname: &str, job: &str) -> Result<(), String> {
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err("Nickname cannot be empty".to_string());
    }
    if nickname.chars().count() > NICKNAME_MAX_CHARS {
        return Err(format!(
            "Nickname must be at most {} characters",
            NICKNAME_MAX_CHARS
        ));
    }
    if job.trim().chars().count() > JOB_MAX_CHARS {
        return Err(format!("Job must be at most {} characters", JOB_MAX_CHARS));
    }
    Ok(())
}

/// Profile API client
pub struct ProfileApiClient {
    config: Config,
    client: Client,
}

impl ProfileApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Update nickname and job; returns the refreshed user record
    pub fn update_profile(&self, nickname: &str, job: &str) -> Result<User, String> {
        validate_profile(nickname, job)?;

        let url = self.config.api_url("/api/auth/update");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let request = UpdateProfileRequest {
                nickname: nickname.trim().to_string(),
                job: job.trim().to_string(),
            };

            let response = self
                .client
                .put(&url)
                .header("Authorization", format!("Bearer {}", token))
                .header("Content-Type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());

                let friendly_error = match status.as_u16() {
                    401 => "Not logged in".to_string(),
                    409 => "That nickname is already taken".to_string(),
                    _ => format!("Request failed: {} - {}", status, error_text),
                };
                return Err(friendly_error);
            }

            response
                .json::<User>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Rooms the user has joined, newest first
    pub fn room_history(&self) -> Result<Vec<RoomHistoryEntry>, String> {
        let url = self.config.api_url("/api/auth/room-history");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", token))
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| status.to_string());
                return Err(format!("Request failed: {} - {}", status, error_text));
            }

            response
                .json::<Vec<RoomHistoryEntry>>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}
