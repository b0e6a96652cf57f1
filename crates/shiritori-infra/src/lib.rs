//! Infrastructure implementations for the shiritori bot.
//!
//! Implements the ports defined in `shiritori-core`: a line-oriented console
//! transport, plus configuration loading and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod transport;
