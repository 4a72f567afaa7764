//! User Identity
//!
//! The session user as returned by `GET /api/auth/user`. Created
//! server-side on first external login; the client never constructs one
//! except from a server response.

use serde::{Deserialize, Serialize};

/// Privilege tier for a user account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary account
    User,
    /// Administrator (user management, signup stats)
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// The authenticated user
///
/// Field names match the server's JSON exactly (snake_case on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    /// Login email from the external provider
    pub email: String,
    /// Display nickname, editable on the profile page
    pub nickname: String,
    /// Free-form job label, editable on the profile page
    #[serde(default)]
    pub job: String,
    /// Avatar URL from the external provider
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Privilege tier
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Whether this account may use the admin surface
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
