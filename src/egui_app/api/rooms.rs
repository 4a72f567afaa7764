//! Rooms API Client
//!
//! Lobby listing and room creation against the `/main` endpoint.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::room::{CreateRoomRequest, Room};

/// Rooms API client
pub struct RoomsApiClient {
    config: Config,
    client: Client,
}

impl RoomsApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch every room for the lobby; filtering and paging are local
    pub fn list_rooms(&self) -> Result<Vec<Room>, String> {
        let url = self.config.api_url("/main");
        let token = self.config.get_token().cloned();

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let mut request = self.client.get(&url);
            if let Some(token) = token.as_ref() {
                request = request.header("Authorization", format!("Bearer {}", token));
            }

            let response = request
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
                .json::<Vec<Room>>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Create a room; the caller navigates with the uuid it generated
    pub fn create_room(&self, request: &CreateRoomRequest) -> Result<Room, String> {
        request.validate().map_err(|e| e.user_message())?;

        let url = self.config.api_url("/main");
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {}", token))
                .header("Content-Type", "application/json")
                .json(request)
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
                    400 => "The server rejected the room settings".to_string(),
                    401 => "Not logged in".to_string(),
                    _ => format!("Request failed: {} - {}", status, error_text),
                };
                return Err(friendly_error);
            }

            response
                .json::<Room>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}
