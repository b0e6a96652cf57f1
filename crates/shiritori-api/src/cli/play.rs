//! `shiritori play` -- run the bot against the terminal.

use std::sync::Arc;

use anyhow::Result;
use console::style;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

use shiritori_core::runner::BotRunner;
use shiritori_infra::transport::ConsoleTransport;
use shiritori_types::ids::ChannelId;

use crate::state::AppState;

/// Play on stdin/stdout until EOF or Ctrl+C.
pub async fn play(
    state: &AppState,
    channel: String,
    cancel: CancellationToken,
    quiet: bool,
) -> Result<()> {
    let transport = ConsoleTransport::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        ChannelId::from(channel),
    );

    if !quiet {
        eprintln!();
        eprintln!(
            "  {} {}",
            style("しりとり").bold(),
            style("(type /start, then words; Ctrl+D to quit)").dim()
        );
        eprintln!();
    }

    let runner = BotRunner::new(
        transport,
        Arc::clone(&state.handler),
        state.config.commands.specs(),
    )
    .with_policy(state.reconnect_policy())
    .with_cancellation(cancel);

    let stats = runner.run().await?;

    if !quiet {
        let active = state.handler.registry().active_channels();
        eprintln!();
        eprintln!(
            "  {} {} messages, {} active games",
            style("Bye!").bold(),
            stats.events,
            active.len()
        );
        for channel_id in &active {
            eprintln!("    {}", style(format!("#{channel_id}")).dim());
        }
    }
    Ok(())
}
