/**
 * Shared Types Module
 *
 * Defines shared types for the egui app: the view enum the central
 * panel dispatches on and the login exchange response.
 */

use serde::{Deserialize, Serialize};

use crate::shared::user::User;

/// Current app view/mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    /// External-login screen
    Login,
    /// Room list with filter, pagination and the create modal
    Lobby,
    /// Inside a chat room
    ChatRoom,
    /// Inside a kanban board room
    BoardRoom,
    /// Profile editing and room history
    Profile,
    /// User management and signup stats (admin only)
    Admin,
    /// Contact form
    Contact,
}

/// Response of the login-code exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}
