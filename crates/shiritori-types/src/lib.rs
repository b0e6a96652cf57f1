//! Shared domain types for the shiritori bot.
//!
//! This crate contains the types passed between the game core and the chat
//! transport: channel and message identifiers, inbound events, outbound
//! feedback, configuration, and the game error kinds.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod event;
pub mod ids;
