//! Integration test suite
//!
//! One binary covering the REST clients against a mock server, the
//! room channel against a scripted WebSocket server, and property
//! tests over the shared validation rules.

pub mod common;
pub mod integration;
pub mod property;
