//! Bot configuration types.
//!
//! `BotConfig` represents the top-level `config.toml` that controls the game
//! rules, the advertised command names, and the transport reconnect policy.

use serde::{Deserialize, Serialize};

use crate::event::CommandSpec;

/// Top-level configuration for the shiritori bot.
///
/// Loaded from `~/.shiritori/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// A word ending with this character loses the game.
    #[serde(default = "default_terminal_char")]
    pub terminal_char: char,

    /// Names and descriptions of the slash commands.
    #[serde(default)]
    pub commands: CommandConfig,

    /// Reconnect behaviour when the transport drops.
    #[serde(default)]
    pub reconnect: ReconnectConfig,
}

fn default_terminal_char() -> char {
    'ん'
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            terminal_char: default_terminal_char(),
            commands: CommandConfig::default(),
            reconnect: ReconnectConfig::default(),
        }
    }
}

/// Slash command names advertised to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    pub start_name: String,
    pub start_description: String,
    pub reset_name: String,
    pub reset_description: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            start_name: "しりとり開始".to_string(),
            start_description: "しりとりゲームを開始します".to_string(),
            reset_name: "しりとりリセット".to_string(),
            reset_description: "しりとりゲームをリセットします".to_string(),
        }
    }
}

impl CommandConfig {
    /// The command list registered with the platform on connect.
    pub fn specs(&self) -> Vec<CommandSpec> {
        vec![
            CommandSpec {
                name: self.start_name.clone(),
                description: self.start_description.clone(),
            },
            CommandSpec {
                name: self.reset_name.clone(),
                description: self.reset_description.clone(),
            },
        ]
    }
}

/// Bounded exponential backoff used when the transport connection fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectConfig {
    /// Consecutive failed attempts before giving up.
    pub max_attempts: u32,
    /// Delay before the first retry, doubled on each further attempt.
    pub initial_backoff_ms: u64,
    /// Upper bound on a single delay.
    pub max_backoff_ms: u64,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 500,
            max_backoff_ms: 30_000,
        }
    }
}
