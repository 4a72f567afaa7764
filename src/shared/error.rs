//! Shared Error Types
//!
//! This module defines error types used across the client: wire
//! serialization failures, field validation failures caught before a
//! request is sent, and protocol errors for channel frames that do not
//! match the closed event unions.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Data validation failures, carrying the field
//! - `ProtocolError` - Malformed or unknown realtime events
//!
//! # Usage
//!
//! ```rust
//! use xfrooms::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("title", "Title must be 2-20 characters");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Realtime frame that failed boundary validation
    #[error("Protocol error: {message}")]
    ProtocolError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Message suitable for an inline notice in the UI
    pub fn user_message(&self) -> String {
        match self {
            Self::SerializationError { message } => format!("Bad server data: {}", message),
            Self::ValidationError { message, .. } => message.clone(),
            Self::ProtocolError { message } => format!("Protocol error: {}", message),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
