//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Nothing here is
//! cached: callers re-evaluate on every snapshot they show.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{BOARD_DIMENSION, WINNING_LINES, WinningLine, check_winner};
