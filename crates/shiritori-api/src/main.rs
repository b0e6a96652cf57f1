//! Shiritori bot entry point.
//!
//! Binary name: `shiritori`
//!
//! Parses CLI arguments, initializes tracing and configuration, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tokio_util::sync::CancellationToken;

use cli::{Cli, Commands};
use shiritori_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_directive};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_directive(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "shiritori", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data_dir.clone()).await?;

    let result = match cli.command {
        Commands::Play { channel } => {
            let quiet = cli.quiet;
            let cancel = CancellationToken::new();
            let signal_cancel = cancel.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                tracing::info!("shutting down gracefully");
                signal_cancel.cancel();
            });
            let result = cli::play::play(&state, channel, cancel, quiet).await;
            if result.is_ok() {
                // A pending stdin read holds a blocking thread that would keep
                // the runtime from shutting down.
                shutdown_tracing();
                std::process::exit(0);
            }
            result
        }
        Commands::Commands => cli::commands::list_commands(&state, cli.json),
        Commands::Config => cli::config::show_config(&state, cli.json),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
