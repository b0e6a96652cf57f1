//! Inbound events and outbound feedback exchanged with the chat transport.
//!
//! The transport turns platform callbacks into [`InboundEvent`]s and renders
//! the [`Feedback`] the game produces. Neither type knows anything about a
//! specific platform library.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, MessageId};

/// An event delivered to the game by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// The start command was invoked in a channel.
    StartGame { channel_id: ChannelId },
    /// The reset command was invoked in a channel.
    ResetGame { channel_id: ChannelId },
    /// A plain message was posted in a channel.
    SubmitWord {
        channel_id: ChannelId,
        message_id: MessageId,
        raw_text: String,
        /// Messages written by bots (including this one) are never played.
        author_is_bot: bool,
    },
}

impl InboundEvent {
    /// The channel this event was raised in.
    pub fn channel_id(&self) -> &ChannelId {
        match self {
            Self::StartGame { channel_id }
            | Self::ResetGame { channel_id }
            | Self::SubmitWord { channel_id, .. } => channel_id,
        }
    }

    /// Short name of the event kind for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartGame { .. } => "start_game",
            Self::ResetGame { .. } => "reset_game",
            Self::SubmitWord { .. } => "submit_word",
        }
    }
}

/// Accept/reject marker attached to a submitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Success,
    Failure,
}

impl ReactionKind {
    /// Emoji the platform shows for this marker.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failure => "❌",
        }
    }
}

/// Output produced by the game for the transport to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Feedback {
    /// A human-readable status message posted to the channel.
    Reply { channel_id: ChannelId, text: String },
    /// A lightweight marker attached to the submitted message.
    Reaction {
        message_id: MessageId,
        kind: ReactionKind,
    },
}

/// A slash command the bot advertises to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
}
