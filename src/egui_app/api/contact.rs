//! Contact API Client
//!
//! The contact form posts one inquiry to `/api/send`. No listing or
//! status tracking; the server mails it onward.

use reqwest::Client;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;

/// Inquiry category chosen in the form
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    General,
    Technical,
    Billing,
}

impl InquiryType {
    pub const ALL: [InquiryType; 3] = [
        InquiryType::General,
        InquiryType::Technical,
        InquiryType::Billing,
    ];

    /// Combo-box label
    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General",
            InquiryType::Technical => "Technical",
            InquiryType::Billing => "Billing",
        }
    }
}

/// Body of `POST /api/send`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub inquiry: InquiryType,
    pub message: String,
}

impl ContactRequest {
    /// Check the form before submission
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Message cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Contact API client
pub struct ContactApiClient {
    config: Config,
    client: Client,
}

impl ContactApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Submit one inquiry
    pub fn send(&self, request: &ContactRequest) -> Result<(), String> {
        request.validate()?;

        let url = self.config.api_url("/api/send");
        let token = self.config.get_token().cloned();

        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let mut builder = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .json(request);
            if let Some(token) = token.as_ref() {
                builder = builder.header("Authorization", format!("Bearer {}", token));
            }

            let response = builder
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
            Ok(())
        })
    }
}
