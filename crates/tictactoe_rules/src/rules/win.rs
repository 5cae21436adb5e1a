//! Win detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Cell, Mark};

/// Side length of the board.
pub const BOARD_DIMENSION: usize = 3;

/// The eight winning triples, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: who owns it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Mark occupying all three cells.
    pub winner: Mark,
    /// Cell indices of the line.
    pub line: [usize; 3],
}

impl WinningLine {
    /// Checks whether `index` is part of the line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Returns the first completed line on the board, if any.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match (board.get(a)?, board.get(b)?, board.get(c)?) {
            (Cell::Occupied(x), Cell::Occupied(y), Cell::Occupied(z)) if x == y && y == z => {
                Some(WinningLine {
                    winner: x,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}
