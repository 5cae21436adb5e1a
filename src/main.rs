//! Tic-tac-toe with history - unified CLI.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{
    AppConfig, DisabledSink, GameController, HttpScoreReporter, ScoreSink, init_file_tracing,
    run_tui, score_server,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            endpoint,
            no_report,
            log_file,
        } => run_play(config, endpoint, no_report, log_file).await,
        Command::Serve { port, host } => run_server(host, port).await,
    }
}

/// Play in the terminal.
#[instrument(skip_all, fields(config_path = %config.display()))]
async fn run_play(
    config: PathBuf,
    endpoint: Option<String>,
    no_report: bool,
    log_file: PathBuf,
) -> Result<()> {
    init_file_tracing(&log_file)?;

    let config = AppConfig::load(&config)?.with_cli_overrides(endpoint, no_report);
    let reporter = config.reporter();

    let sink: Arc<dyn ScoreSink> = if *reporter.enabled() {
        Arc::new(HttpScoreReporter::new(
            reporter.endpoint().clone(),
            tokio::runtime::Handle::current(),
        ))
    } else {
        info!("Score reporting disabled");
        Arc::new(DisabledSink)
    };

    run_tui(GameController::new(sink)).await
}

/// Run the score server.
async fn run_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting score server");
    score_server::serve(host, port).await
}
