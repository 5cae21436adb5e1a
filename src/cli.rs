//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Two-player tic-tac-toe with time travel and score reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the configuration file (optional)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Score endpoint, overrides config and environment
        #[arg(long)]
        endpoint: Option<String>,

        /// Do not send score reports
        #[arg(long)]
        no_report: bool,

        /// Where to write logs while the TUI owns the terminal
        #[arg(long, default_value = "tictactoe_history.log")]
        log_file: std::path::PathBuf,
    },

    /// Run the in-memory score server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
