//! Chat transport port.
//!
//! Defines the `ChatTransport` trait that platform integrations implement.
//! A transport delivers [`InboundEvent`]s from the platform and renders
//! [`Feedback`] back to it; it knows nothing about the game rules.

use std::future::Future;

use shiritori_types::event::{CommandSpec, Feedback, InboundEvent};
use thiserror::Error;

/// Errors raised by a chat transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Establishing the connection failed (bad credentials, network down, ...).
    #[error("connect failed: {0}")]
    Connect(String),

    /// An established connection dropped. The runner reconnects.
    #[error("disconnected: {0}")]
    Disconnected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport was shut down and cannot be used again.
    #[error("transport closed")]
    Closed,
}

impl TransportError {
    /// Whether reconnecting may recover from this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Connect(_) | Self::Disconnected(_) | Self::Io(_))
    }
}

/// A connection to a chat platform.
pub trait ChatTransport: Send {
    /// Open (or reopen) the connection.
    fn connect(&mut self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Advertise the bot's slash commands to the platform.
    fn register_commands(
        &mut self,
        commands: &[CommandSpec],
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Wait for the next inbound event.
    ///
    /// Returns `Ok(None)` once the event stream has ended for good.
    fn next_event(
        &mut self,
    ) -> impl Future<Output = Result<Option<InboundEvent>, TransportError>> + Send;

    /// Render one piece of feedback on the platform.
    fn deliver(
        &mut self,
        feedback: Feedback,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}
