//! Derived game phase and status text.

use tictactoe_rules::{Board, Mark, WinningLine, check_winner, is_draw};
use tracing::instrument;

/// Phase of the game at the snapshot on display.
///
/// Only "started or not" is stored; the rest is recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Players have not been named yet.
    NotStarted,
    /// Moves are still possible.
    InProgress,
    /// A line has been completed.
    Won(WinningLine),
    /// Full board without a line.
    Draw,
}

impl GamePhase {
    /// Derives the phase of a started game from a snapshot.
    #[instrument]
    pub fn of(board: &Board) -> Self {
        if let Some(win) = check_winner(board) {
            GamePhase::Won(win)
        } else if is_draw(board) {
            GamePhase::Draw
        } else {
            GamePhase::InProgress
        }
    }

    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Draw)
    }

    /// Winning line, if the phase is [`GamePhase::Won`].
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GamePhase::Won(win) => Some(*win),
            _ => None,
        }
    }
}

/// Status line shown above the board.
///
/// `move_index` is the history pointer; the text counts moves from one.
#[instrument]
pub fn status_text(board: &Board, move_index: usize) -> String {
    match GamePhase::of(board) {
        GamePhase::Won(win) => format!("Winner: {}", win.winner),
        GamePhase::Draw => "It's a draw!".to_string(),
        GamePhase::InProgress | GamePhase::NotStarted => {
            let next = if move_index % 2 == 0 { Mark::X } else { Mark::O };
            format!("Next player: {}, You are at move #{}", next, move_index + 1)
        }
    }
}
