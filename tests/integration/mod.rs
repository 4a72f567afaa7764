//! Integration tests

pub mod admin_api_test;
pub mod channel_test;
pub mod config_test;
pub mod contact_api_test;
pub mod profile_api_test;
pub mod room_flow_test;
pub mod rooms_api_test;
