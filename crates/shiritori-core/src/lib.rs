//! Game rules and event handling for the shiritori bot.
//!
//! This crate defines the per-channel game session, the session registry,
//! the inbound event handler, and the "port" (`ChatTransport` trait) that the
//! infrastructure layer implements. It depends only on `shiritori-types` --
//! never on `shiritori-infra` or any platform crate.

pub mod game;
pub mod handler;
pub mod runner;
pub mod transport;

pub use game::{GameSession, SessionRegistry};
pub use handler::GameHandler;
