//! Inbound event handling.
//!
//! `GameHandler` owns the [`SessionRegistry`] and turns each [`InboundEvent`]
//! into the [`Feedback`] the transport should render. All of the game's
//! observable behaviour is decided here.

use shiritori_types::error::GameError;
use shiritori_types::event::{Feedback, InboundEvent, ReactionKind};
use shiritori_types::ids::{ChannelId, MessageId};
use tracing::{debug, info};

use crate::game::messages;
use crate::game::{GameSession, SessionRegistry, SessionUpdate};

/// Trait for turning inbound events into feedback.
///
/// Implementations must treat each call as one atomic step for the event's
/// channel. The runner calls this from whatever task received the event.
pub trait EventProcessor: Send + Sync {
    fn process(&self, event: InboundEvent) -> Vec<Feedback>;
}

/// Result of a word submission that did not end in an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty text, or no game in the channel. Nothing is reported.
    Ignored,
    /// The word was appended to the chain.
    Accepted { word: String, chain_len: usize },
}

/// The shiritori game, one session per channel.
#[derive(Debug, Default)]
pub struct GameHandler {
    registry: SessionRegistry,
}

impl GameHandler {
    pub fn new(registry: SessionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn start_game(&self, channel_id: &ChannelId) -> Result<GameSession, GameError> {
        self.registry.start(channel_id)
    }

    pub fn reset_game(&self, channel_id: &ChannelId) -> Result<GameSession, GameError> {
        self.registry.reset(channel_id)
    }

    /// Play `raw_text` as the next word in `channel_id`.
    ///
    /// A word ending with the terminal character always loses, regardless of
    /// whether it would otherwise be a legal move: the session is removed and
    /// [`GameError::LossCondition`] returned. Other illegal moves return
    /// [`GameError::InvalidMove`] and leave the session untouched.
    pub fn submit_word(
        &self,
        channel_id: &ChannelId,
        raw_text: &str,
    ) -> Result<SubmitOutcome, GameError> {
        let word = raw_text.trim();
        if word.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        self.registry
            .update(channel_id, |session| {
                if session.is_losing_word(word) {
                    info!(
                        %channel_id,
                        %word,
                        words = session.len(),
                        started_at = %session.started_at(),
                        "game lost"
                    );
                    return SessionUpdate::End(Err(GameError::LossCondition {
                        word: word.to_string(),
                        terminal: session.terminal_char(),
                    }));
                }

                match session.check_move(word) {
                    Ok(()) => {
                        session.add_word(word);
                        SessionUpdate::Keep(Ok(SubmitOutcome::Accepted {
                            word: word.to_string(),
                            chain_len: session.len(),
                        }))
                    }
                    Err(reason) => SessionUpdate::Keep(Err(GameError::InvalidMove {
                        last_word: session.last_word().unwrap_or_default().to_string(),
                        reason,
                    })),
                }
            })
            .unwrap_or(Ok(SubmitOutcome::Ignored))
    }

    /// Dispatch one inbound event and collect the feedback to render.
    pub fn handle(&self, event: InboundEvent) -> Vec<Feedback> {
        match event {
            InboundEvent::StartGame { channel_id } => {
                let text = match self.start_game(&channel_id) {
                    Ok(_) => {
                        info!(%channel_id, "game started");
                        messages::GAME_STARTED.to_string()
                    }
                    Err(err) => {
                        debug!(%channel_id, %err, "start rejected");
                        messages::for_error(&err, "")
                    }
                };
                vec![Feedback::Reply { channel_id, text }]
            }

            InboundEvent::ResetGame { channel_id } => {
                let text = match self.reset_game(&channel_id) {
                    Ok(session) => {
                        info!(
                            %channel_id,
                            words = session.len(),
                            started_at = %session.started_at(),
                            "game reset"
                        );
                        messages::GAME_RESET.to_string()
                    }
                    Err(err) => {
                        debug!(%channel_id, %err, "reset rejected");
                        messages::for_error(&err, "")
                    }
                };
                vec![Feedback::Reply { channel_id, text }]
            }

            InboundEvent::SubmitWord {
                channel_id,
                message_id,
                raw_text,
                author_is_bot,
            } => {
                if author_is_bot {
                    return Vec::new();
                }
                self.word_feedback(channel_id, message_id, &raw_text)
            }
        }
    }

    fn word_feedback(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        raw_text: &str,
    ) -> Vec<Feedback> {
        match self.submit_word(&channel_id, raw_text) {
            Ok(SubmitOutcome::Ignored) => Vec::new(),
            Ok(SubmitOutcome::Accepted { word, chain_len }) => {
                debug!(%channel_id, %word, chain_len, "word accepted");
                vec![Feedback::Reaction {
                    message_id,
                    kind: ReactionKind::Success,
                }]
            }
            Err(err) => {
                if !matches!(err, GameError::LossCondition { .. }) {
                    debug!(%channel_id, %err, "word rejected");
                }
                vec![
                    Feedback::Reaction {
                        message_id,
                        kind: ReactionKind::Failure,
                    },
                    Feedback::Reply {
                        channel_id,
                        text: messages::for_error(&err, raw_text.trim()),
                    },
                ]
            }
        }
    }
}

impl EventProcessor for GameHandler {
    fn process(&self, event: InboundEvent) -> Vec<Feedback> {
        self.handle(event)
    }
}
