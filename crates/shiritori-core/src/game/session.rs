//! Word chain and move validation for a single channel.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shiritori_types::error::MoveRejection;
use shiritori_types::ids::ChannelId;

/// Character that ends the game when a word ends with it.
pub const DEFAULT_TERMINAL_CHAR: char = 'ん';

/// Trim surrounding whitespace and lowercase a word.
///
/// The normalized form is only used for comparisons and duplicate lookup;
/// the chain keeps what the player typed.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Lowercase a terminal character so it compares against normalized words.
///
/// Characters whose lowercase form is more than one character are kept as is.
pub fn normalize_terminal_char(terminal_char: char) -> char {
    let mut lower = terminal_char.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => terminal_char,
    }
}

/// The state of one running game.
///
/// `used_words` always holds exactly one normalized entry per word in
/// `word_chain`.
#[derive(Debug, Clone)]
pub struct GameSession {
    channel_id: ChannelId,
    word_chain: Vec<String>,
    used_words: HashSet<String>,
    terminal_char: char,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Create an empty session using the default terminal character.
    pub fn new(channel_id: ChannelId) -> Self {
        Self::with_terminal_char(channel_id, DEFAULT_TERMINAL_CHAR)
    }

    pub fn with_terminal_char(channel_id: ChannelId, terminal_char: char) -> Self {
        Self {
            channel_id,
            word_chain: Vec::new(),
            used_words: HashSet::new(),
            terminal_char: normalize_terminal_char(terminal_char),
            started_at: Utc::now(),
        }
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Accepted words in play order, as typed.
    pub fn word_chain(&self) -> &[String] {
        &self.word_chain
    }

    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    pub fn terminal_char(&self) -> char {
        self.terminal_char
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The most recently accepted word, if any.
    pub fn last_word(&self) -> Option<&str> {
        self.word_chain.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.word_chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.word_chain.len()
    }

    /// Check whether `candidate` may follow the current chain.
    ///
    /// Any word is accepted as the opening move. After that the word must
    /// start with the last character of the previous word, must not repeat an
    /// earlier word, and must not end with the terminal character.
    pub fn check_move(&self, candidate: &str) -> Result<(), MoveRejection> {
        let Some(last_word) = self.last_word() else {
            return Ok(());
        };

        let normalized = normalize(candidate);
        let last_char = normalize(last_word).chars().last();
        let first_char = normalized.chars().next();

        if first_char != last_char {
            return Err(MoveRejection::ChainMismatch {
                expected: last_char.unwrap_or_default(),
                found: first_char.unwrap_or_default(),
            });
        }

        if self.used_words.contains(&normalized) {
            return Err(MoveRejection::Repeated);
        }

        if normalized.ends_with(self.terminal_char) {
            return Err(MoveRejection::TerminalEnding(self.terminal_char));
        }

        Ok(())
    }

    pub fn is_valid_move(&self, candidate: &str) -> bool {
        self.check_move(candidate).is_ok()
    }

    /// Whether playing `candidate` loses the game.
    ///
    /// Independent of chain state: a terminal word loses even as the opening
    /// move.
    pub fn is_losing_word(&self, candidate: &str) -> bool {
        normalize(candidate).ends_with(self.terminal_char)
    }

    /// Record an accepted word. Performs no validation.
    pub fn add_word(&mut self, raw: &str) {
        self.used_words.insert(normalize(raw));
        self.word_chain.push(raw.to_string());
    }
}
