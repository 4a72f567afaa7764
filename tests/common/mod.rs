//! Common test utilities
//!
//! - JSON fixtures matching the server's wire shapes
//! - Mock REST server helpers (wiremock)
//! - A scripted WebSocket room server for channel tests

pub mod fixtures;
pub mod mock_api;
pub mod ws_harness;

pub use fixtures::*;
pub use mock_api::*;
pub use ws_harness::ScriptedRoomServer;
