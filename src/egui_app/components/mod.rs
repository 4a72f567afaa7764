//! Room UI Components
//!
//! This module contains reusable UI components for the rooms interface.

pub mod input_bar;
pub mod keyword_chips;
pub mod member_list;
pub mod message_block;
pub mod modal;
pub mod pagination;
pub mod room_card;
pub mod room_header;
