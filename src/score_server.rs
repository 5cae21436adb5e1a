//! In-memory score server.
//!
//! Accepts the same reports the game sends and keeps a running score per
//! player name for as long as the process lives.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Report body accepted by `POST /start_game`.
///
/// Start reports omit `winner` and `loser`; draw reports send them as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// X player's name.
    #[serde(default)]
    pub player_x: Option<String>,
    /// O player's name.
    #[serde(default)]
    pub player_o: Option<String>,
    /// Winner's name.
    #[serde(default)]
    pub winner: Option<String>,
    /// Loser's name.
    #[serde(default)]
    pub loser: Option<String>,
}

/// Response to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAck {
    /// Human-readable confirmation.
    pub message: String,
}

/// Running scores keyed by player name.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    scores: HashMap<String, i64>,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a report.
    ///
    /// Known players gain a point for a win and lose one for a loss. Unknown
    /// players are registered at zero, whatever the report says.
    #[instrument(skip(self))]
    pub fn apply(&mut self, report: &ScoreReport) {
        for name in [&report.player_x, &report.player_o].into_iter().flatten() {
            match self.scores.get_mut(name) {
                Some(score) => {
                    if report.winner.as_ref() == Some(name) {
                        *score += 1;
                    } else if report.loser.as_ref() == Some(name) {
                        *score -= 1;
                    }
                    debug!(player = %name, score = *score, "Score updated");
                }
                None => {
                    info!(player = %name, "Registering new player");
                    self.scores.insert(name.clone(), 0);
                }
            }
        }
    }

    /// Score of `name`, if registered.
    pub fn score(&self, name: &str) -> Option<i64> {
        self.scores.get(name).copied()
    }

    /// All players, highest score first, ties by name.
    pub fn standings(&self) -> Vec<(String, i64)> {
        let mut standings: Vec<(String, i64)> = self
            .scores
            .iter()
            .map(|(name, score)| (name.clone(), *score))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        standings
    }
}

/// Shared server state.
#[derive(Debug, Clone, Default)]
pub struct ServerState {
    scoreboard: Arc<Mutex<Scoreboard>>,
}

impl ServerState {
    /// Creates state with an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the scoreboard.
    pub fn scoreboard(&self) -> &Arc<Mutex<Scoreboard>> {
        &self.scoreboard
    }
}

/// Builds the HTTP routes.
#[instrument(skip(state))]
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/scoreboard", get(scoreboard))
        .route("/start_game", post(report))
        .with_state(state)
}

async fn home() -> &'static str {
    "Welcome to the Tic-Tac-Toe API! Use /scoreboard to view the scores."
}

#[instrument(skip(state))]
async fn scoreboard(State(state): State<ServerState>) -> Json<Vec<(String, i64)>> {
    let board = state.scoreboard.lock().await;
    Json(board.standings())
}

#[instrument(skip(state))]
async fn report(
    State(state): State<ServerState>,
    Json(report): Json<ScoreReport>,
) -> Json<ReportAck> {
    info!(?report, "Score report received");
    state.scoreboard.lock().await.apply(&report);
    Json(ReportAck {
        message: "Scores updated!".to_string(),
    })
}

/// Binds `host:port` and serves until the process is stopped.
#[instrument]
pub async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Score server ready at http://{}:{}/", host, port);
    axum::serve(listener, router(ServerState::new())).await?;
    Ok(())
}
