//! Pure tic-tac-toe rules.
//!
//! Board snapshots are small `Copy` values: every move produces a new
//! snapshot instead of mutating an existing one, which is what the history
//! model in the application crate relies on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod types;

pub use error::RulesError;
pub use rules::{BOARD_DIMENSION, WINNING_LINES, WinningLine, check_winner, is_draw, is_full};
pub use types::{Board, CELL_COUNT, Cell, Mark};
