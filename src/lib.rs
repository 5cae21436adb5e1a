//! Two-player tic-tac-toe with time-travel history and score reporting.
//!
//! # Architecture
//!
//! - **Rules** (`tictactoe_rules`): board snapshots and win detection
//! - **History**: snapshots indexed by move, with a movable pointer
//! - **Controller**: the single owner of game state; reports starts and
//!   results to a [`ScoreSink`]
//! - **Board view**: side-effect-free render model of one snapshot
//! - **Score server**: in-memory scoreboard that accepts the reports
//! - **TUI**: name entry and in-game screens
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tictactoe_history::{DisabledSink, GameController};
//!
//! let mut game = GameController::new(Arc::new(DisabledSink));
//! game.start_game("Ann", "Bob").unwrap();
//! game.play_move(4).unwrap();
//! assert_eq!(game.board_view().status(), "Next player: O, You are at move #2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod config;
mod controller;
mod error;
mod history;
mod phase;
mod report;
pub mod score_server;
mod tui;

// Crate-level exports - Game state
pub use board_view::{BoardView, CellView};
pub use controller::{GameController, MoveEntry, SortOrder};
pub use error::{MoveError, StartError};
pub use history::MoveHistory;
pub use phase::{GamePhase, status_text};

// Crate-level exports - Score reporting
pub use report::{
    DisabledSink, EndReport, HttpScoreReporter, ReportError, ScoreEvent, ScoreSink, StartReport,
};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ENDPOINT_ENV, ReporterConfig};

// Crate-level exports - Terminal front end
pub use tui::{App, init_file_tracing, run_tui};

// Crate-level exports - Rules
pub use tictactoe_rules::{Board, Cell, Mark, WinningLine, check_winner};
