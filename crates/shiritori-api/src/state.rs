//! Application state wiring the game together.
//!
//! AppState holds the loaded configuration and the game handler used by the
//! CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use shiritori_core::game::SessionRegistry;
use shiritori_core::handler::GameHandler;
use shiritori_core::runner::ReconnectPolicy;
use shiritori_infra::config::load_bot_config;
use shiritori_infra::filesystem::resolve_data_dir;
use shiritori_types::config::BotConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: BotConfig,
    pub data_dir: PathBuf,
    pub handler: Arc<GameHandler>,
}

impl AppState {
    /// Load configuration from the data directory and build the game.
    ///
    /// `data_dir` overrides the default location when given.
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        let config = load_bot_config(&data_dir).await;
        tracing::debug!(
            data_dir = %data_dir.display(),
            terminal_char = %config.terminal_char,
            "configuration loaded"
        );

        let handler = GameHandler::new(SessionRegistry::new(config.terminal_char));

        Ok(Self {
            config,
            data_dir,
            handler: Arc::new(handler),
        })
    }

    pub fn reconnect_policy(&self) -> ReconnectPolicy {
        ReconnectPolicy::from(&self.config.reconnect)
    }
}
