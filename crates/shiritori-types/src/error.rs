use thiserror::Error;

/// Why a candidate word is not a legal next move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("word must start with '{expected}', got '{found}'")]
    ChainMismatch { expected: char, found: char },

    #[error("word has already been played")]
    Repeated,

    #[error("word ends with the terminal character '{0}'")]
    TerminalEnding(char),
}

/// Per-event game outcomes that are reported back to the channel.
///
/// None of these are fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game is already running in this channel")]
    AlreadyActive,

    #[error("no game is running in this channel")]
    NoActiveSession,

    #[error("invalid move after '{last_word}': {reason}")]
    InvalidMove {
        last_word: String,
        reason: MoveRejection,
    },

    #[error("'{word}' ends with '{terminal}', the game is lost")]
    LossCondition { word: String, terminal: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejection_display() {
        let err = MoveRejection::ChainMismatch {
            expected: 'ら',
            found: 'か',
        };
        assert_eq!(err.to_string(), "word must start with 'ら', got 'か'");
    }

    #[test]
    fn test_invalid_move_display_names_last_word() {
        let err = GameError::InvalidMove {
            last_word: "いぬ".to_string(),
            reason: MoveRejection::Repeated,
        };
        assert!(err.to_string().contains("いぬ"));
        assert!(err.to_string().contains("already been played"));
    }

    #[test]
    fn test_loss_condition_display() {
        let err = GameError::LossCondition {
            word: "ぱん".to_string(),
            terminal: 'ん',
        };
        assert_eq!(err.to_string(), "'ぱん' ends with 'ん', the game is lost");
    }
}
