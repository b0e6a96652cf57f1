//! Reply texts posted to the channel.

use shiritori_types::error::{GameError, MoveRejection};

pub const GAME_STARTED: &str = "しりとりゲームを開始しました！最初の単語を入力してください。";
pub const ALREADY_ACTIVE: &str = "このチャンネルでは既にしりとりゲームが進行中です。";
pub const NO_ACTIVE_SESSION: &str = "このチャンネルではしりとりゲームは進行していません。";
pub const GAME_RESET: &str = "しりとりゲームをリセットしました。";

/// Rejection explanation naming the previous word.
pub fn invalid_move(last_word: &str, word: &str, reason: &MoveRejection) -> String {
    match reason {
        MoveRejection::Repeated => {
            format!("「{word}」は既に使われています。前の単語は「{last_word}」です。")
        }
        MoveRejection::ChainMismatch { .. } | MoveRejection::TerminalEnding(_) => {
            format!("間違いです！前の単語「{last_word}」の最後の文字から始める必要があります。")
        }
    }
}

pub fn loss(terminal: char) -> String {
    format!("「{terminal}」で終わる単語が入力されました。あなたの負けです！ゲーム終了します。")
}

/// The channel reply for a game error.
pub fn for_error(err: &GameError, word: &str) -> String {
    match err {
        GameError::AlreadyActive => ALREADY_ACTIVE.to_string(),
        GameError::NoActiveSession => NO_ACTIVE_SESSION.to_string(),
        GameError::InvalidMove { last_word, reason } => invalid_move(last_word, word, reason),
        GameError::LossCondition { terminal, .. } => loss(*terminal),
    }
}
