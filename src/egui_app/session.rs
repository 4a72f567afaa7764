/**
 * Session Module
 *
 * The explicit session object handed to views, plus the HTTP client
 * functions for the identity endpoints. Login happens in the system
 * browser (external provider); the app exchanges the code shown there
 * for a token and keeps it in memory only.
 */

use crate::egui_app::config::Config;
use crate::egui_app::types::LoginResponse;
use crate::shared::user::User;
use reqwest::Client;
use tokio::runtime::Runtime;

/// Session state, constructed once at startup
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current user's id; views that emit events require one
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin())
    }

    pub fn set_user(&mut self, user: User) {
        self.authenticated = true;
        self.user = Some(user);
        self.error = None;
    }

    /// Back to logged-out; the caller clears the token on the config
    pub fn clear(&mut self) {
        self.authenticated = false;
        self.user = None;
        self.error = None;
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

fn build_client(config: &Config) -> Result<Client, String> {
    Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

/// The page the user visits in a browser to log in
pub fn login_page_url(config: &Config) -> String {
    config.api_url("/api/auth/google")
}

/// Fetch the current identity
///
/// A 401 means logged out, reported as a distinct message so the
/// caller can route to the login view without surfacing an error.
pub fn fetch_current_user(config: &Config) -> Result<User, String> {
    let client = build_client(config)?;
    let url = config.api_url("/api/auth/user");
    let token = config.get_token().cloned();

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let mut request = client.get(&url);
        if let Some(token) = token.as_ref() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err("Not logged in".to_string());
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Identity check failed: {} - {}", status, error_text));
        }

        let user: User = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(user)
    })
}

/// Exchange the code from the browser login page for a token
pub fn exchange_login_code(config: &Config, code: String) -> Result<LoginResponse, String> {
    let client = build_client(config)?;
    let url = config.api_url("/api/auth/google");

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(format!("Login failed: {} - {}", status, error_text));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(login)
    })
}

/// End the server-side session
pub fn logout(config: &Config) -> Result<(), String> {
    let client = build_client(config)?;
    let url = config.api_url("/api/auth/logout");
    let token = config.get_token().cloned();

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let mut request = client.get(&url);
        if let Some(token) = token.as_ref() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Logout failed: {}", response.status()));
        }
        Ok(())
    })
}
