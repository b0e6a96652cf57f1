//! Shiritori game state.
//!
//! - `session` -- `GameSession`, the word chain and move validation for one channel
//! - `registry` -- `SessionRegistry`, at most one session per channel
//! - `messages` -- user-facing reply texts

pub mod messages;
pub mod registry;
pub mod session;

pub use registry::{SessionRegistry, SessionUpdate};
pub use session::GameSession;
