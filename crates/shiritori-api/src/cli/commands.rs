//! `shiritori commands` -- list the registered slash commands.

use anyhow::Result;
use console::style;

use crate::state::AppState;

pub fn list_commands(state: &AppState, json: bool) -> Result<()> {
    let specs = state.config.commands.specs();

    if json {
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    println!();
    for spec in &specs {
        println!(
            "  {}  {}",
            style(format!("/{}", spec.name)).cyan().bold(),
            style(&spec.description).dim()
        );
    }
    println!();
    Ok(())
}
