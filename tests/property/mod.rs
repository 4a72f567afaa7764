//! Property-based tests

pub mod countdown_proptest;
pub mod keyword_proptest;
pub mod quota_proptest;
