//! Bot configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.shiritori/` in
//! production) and deserializes it into [`BotConfig`]. Falls back to sensible
//! defaults when the file is missing or malformed.

use std::path::Path;

use shiritori_types::config::BotConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load the bot configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BotConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_bot_config(data_dir: &Path) -> BotConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return BotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return BotConfig::default();
        }
    };

    match toml::from_str::<BotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            BotConfig::default()
        }
    }
}

/// Render a config as TOML for display.
pub fn render_bot_config(config: &BotConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_bot_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_bot_config(tmp.path()).await;
        assert_eq!(config, BotConfig::default());
    }

    #[tokio::test]
    async fn load_bot_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
terminal_char = "n"

[reconnect]
max_attempts = 2
"#,
        )
        .await
        .unwrap();

        let config = load_bot_config(tmp.path()).await;
        assert_eq!(config.terminal_char, 'n');
        assert_eq!(config.reconnect.max_attempts, 2);
        assert_eq!(config.commands.start_name, "しりとり開始");
    }

    #[tokio::test]
    async fn load_bot_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_bot_config(tmp.path()).await;
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn render_bot_config_parses_back() {
        let rendered = render_bot_config(&BotConfig::default()).unwrap();
        assert!(rendered.contains("terminal_char"));
        assert!(rendered.contains("[reconnect]"));
        let parsed: BotConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, BotConfig::default());
    }
}
