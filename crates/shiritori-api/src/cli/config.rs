//! `shiritori config` -- show the effective configuration.

use anyhow::Result;
use console::style;

use shiritori_infra::config::{render_bot_config, CONFIG_FILE};

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let config_path = state.data_dir.join(CONFIG_FILE);

    if json {
        let out = serde_json::json!({
            "path": config_path.display().to_string(),
            "exists": config_path.exists(),
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let source = if config_path.exists() {
        format!("{}", style(config_path.display()).cyan())
    } else {
        format!("{} (not found, using defaults)", style(config_path.display()).dim())
    };

    println!();
    println!("  {} {}", style("Config:").bold(), source);
    println!();
    for line in render_bot_config(&state.config)?.lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}
