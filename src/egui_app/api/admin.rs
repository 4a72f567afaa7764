//! Admin API Client
//!
//! User management and signup statistics. Every endpoint requires the
//! admin role; the server answers 403 otherwise and the client never
//! shows the admin view to begin with.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::user::Role;

/// One row in the admin user table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Signup count for one month of the selected year
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MonthlySignup {
    /// 1-12
    pub month: u32,
    pub count: u64,
}

/// Admin API client
pub struct AdminApiClient {
    config: Config,
    client: Client,
}

impl AdminApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = self.config.api_url(path);
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

                let friendly_error = match status.as_u16() {
                    401 => "Not logged in".to_string(),
                    403 => "Admin privileges required".to_string(),
                    _ => format!("Request failed: {} - {}", status, error_text),
                };
                return Err(friendly_error);
            }

            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Every registered user; paging is local
    pub fn list_users(&self) -> Result<Vec<AdminUser>, String> {
        self.get_json("/api/admin/users")
    }

    /// Delete one account
    pub fn delete_user(&self, user_id: i64) -> Result<(), String> {
        let url = self.config.api_url(&format!("/api/admin/users/{}", user_id));
        let token = self.config.get_token().ok_or("Not authenticated")?;

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
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

                let friendly_error = match status.as_u16() {
                    403 => "Admin privileges required".to_string(),
                    404 => "User not found".to_string(),
                    _ => format!("Request failed: {} - {}", status, error_text),
                };
                return Err(friendly_error);
            }
            Ok(())
        })
    }

    /// Years with at least one signup, for the chart selector
    pub fn available_years(&self) -> Result<Vec<i32>, String> {
        self.get_json("/api/admin/available-years")
    }

    /// Signup counts for one year; months can be sparse
    pub fn monthly_signups(&self, year: i32) -> Result<Vec<MonthlySignup>, String> {
        self.get_json(&format!("/api/admin/monthly-signups/{}", year))
    }
}

/// Spread sparse server months over a full twelve-month series
pub fn full_year_series(signups: &[MonthlySignup]) -> [u64; 12] {
    let mut series = [0u64; 12];
    for signup in signups {
        if (1..=12).contains(&signup.month) {
            series[(signup.month - 1) as usize] = signup.count;
        }
    }
    series
}
