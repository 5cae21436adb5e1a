//! Draw detection.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if every cell is occupied.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
