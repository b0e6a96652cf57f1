//! CLI command definitions for the `shiritori` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod commands;
pub mod config;
pub mod play;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Run a shiritori word-chain game bot.
#[derive(Parser)]
#[command(name = "shiritori", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory holding config.toml (default: ~/.shiritori).
    #[arg(long, global = true, env = "SHIRITORI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play in the terminal: each input line is a chat message.
    Play {
        /// Channel that plain lines are posted to.
        #[arg(long, default_value = "console")]
        channel: String,
    },

    /// List the slash commands the bot registers.
    Commands,

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
