//! REST Clients
//!
//! One blocking client per server surface, all built the same way: a
//! `Config` for URLs and the token, a fresh runtime per call, and
//! `Result<T, String>` with messages ready for inline display. The
//! views run these on background threads and poll the results.

pub mod admin;
pub mod contact;
pub mod profile;
pub mod rooms;
