//! Event loop that connects a transport to the game.
//!
//! - `reconnect` -- `ReconnectPolicy`, bounded exponential backoff
//!
//! `BotRunner` connects the transport, registers the slash commands, then
//! pumps inbound events through an [`EventProcessor`] and delivers the
//! resulting feedback. Dropped connections are re-established under the
//! reconnect policy; a cancellation token stops the loop cleanly.

pub mod reconnect;

use std::sync::Arc;

use shiritori_types::event::{CommandSpec, Feedback};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::handler::EventProcessor;
use crate::transport::{ChatTransport, TransportError};

pub use reconnect::ReconnectPolicy;

/// Errors that end the runner.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("gave up reconnecting after {attempts} attempts: {last_error}")]
    ReconnectExhausted { attempts: u32, last_error: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("runner cancelled")]
    Cancelled,
}

/// Counters reported when the runner stops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub events: u64,
    pub feedback_delivered: u64,
    pub reconnects: u32,
}

/// Drives one transport until its event stream ends or it is cancelled.
pub struct BotRunner<T, P> {
    transport: T,
    processor: Arc<P>,
    commands: Vec<CommandSpec>,
    policy: ReconnectPolicy,
    cancel: CancellationToken,
}

impl<T, P> BotRunner<T, P>
where
    T: ChatTransport,
    P: EventProcessor,
{
    pub fn new(transport: T, processor: Arc<P>, commands: Vec<CommandSpec>) -> Self {
        Self {
            transport,
            processor,
            commands,
            policy: ReconnectPolicy::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that stops the runner when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run until the event stream ends, the token is cancelled, or the
    /// transport fails beyond recovery.
    pub async fn run(mut self) -> Result<RunStats, RunnerError> {
        let mut stats = RunStats::default();
        match self.run_loop(&mut stats).await {
            Ok(()) | Err(RunnerError::Cancelled) => {
                info!(
                    events = stats.events,
                    reconnects = stats.reconnects,
                    "runner stopped"
                );
                Ok(stats)
            }
            Err(err) => Err(err),
        }
    }

    async fn run_loop(&mut self, stats: &mut RunStats) -> Result<(), RunnerError> {
        self.connect_with_retry().await?;
        let cancel = self.cancel.clone();
        // Dropped connections since the last event that was fully handled
        let mut failures = 0;

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("shutdown requested");
                    return Ok(());
                }
                next = self.transport.next_event() => next,
            };

            let err = match next {
                Ok(Some(event)) => {
                    stats.events += 1;
                    debug!(channel_id = %event.channel_id(), kind = event.kind(), "event received");
                    let feedback = self.processor.process(event);
                    match self.deliver_all(feedback, stats).await {
                        Ok(()) => {
                            failures = 0;
                            continue;
                        }
                        // The rest of this event's feedback is dropped
                        Err(err) => err,
                    }
                }
                Ok(None) => {
                    info!("event stream ended");
                    return Ok(());
                }
                Err(err) => err,
            };

            if !err.is_recoverable() {
                return Err(err.into());
            }
            failures += 1;
            self.reconnect(failures, err).await?;
            stats.reconnects += 1;
        }
    }

    async fn deliver_all(
        &mut self,
        feedback: Vec<Feedback>,
        stats: &mut RunStats,
    ) -> Result<(), TransportError> {
        for item in feedback {
            self.transport.deliver(item).await?;
            stats.feedback_delivered += 1;
        }
        Ok(())
    }

    /// Back off after the `failures`-th dropped connection in a row, then
    /// connect again.
    async fn reconnect(&mut self, failures: u32, err: TransportError) -> Result<(), RunnerError> {
        if !self.policy.should_retry(failures) {
            return Err(RunnerError::ReconnectExhausted {
                attempts: failures,
                last_error: err.to_string(),
            });
        }

        let delay = self.policy.delay_for(failures);
        warn!(failures, ?delay, %err, "connection lost, reconnecting");
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(RunnerError::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
        self.connect_with_retry().await
    }

    /// Connect under the reconnect policy, then register commands.
    ///
    /// A failed command registration is logged but does not stop the bot.
    async fn connect_with_retry(&mut self) -> Result<(), RunnerError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let err = match self.transport.connect().await {
                Ok(()) => break,
                Err(err) => err,
            };

            if !err.is_recoverable() {
                return Err(err.into());
            }
            if !self.policy.should_retry(attempt) {
                return Err(RunnerError::ReconnectExhausted {
                    attempts: attempt,
                    last_error: err.to_string(),
                });
            }

            let delay = self.policy.delay_for(attempt);
            warn!(attempt, ?delay, %err, "connect failed, retrying");
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(RunnerError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!(attempt, "connected");
        match self.transport.register_commands(&self.commands).await {
            Ok(()) => info!(count = self.commands.len(), "registered commands"),
            Err(err) => warn!(%err, "failed to register commands"),
        }
        Ok(())
    }
}
