//! Render model for the 3x3 grid.
//!
//! A [`BoardView`] is rebuilt from the current snapshot every frame. Building
//! it has no side effects, so it can be drawn as often as the terminal likes.

use derive_getters::Getters;
use tictactoe_rules::{BOARD_DIMENSION, Board, CELL_COUNT, Mark, WinningLine};
use tracing::{debug, instrument};

use crate::phase::{GamePhase, status_text};

/// One cell as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Cell index (0-8, row-major).
    pub index: usize,
    /// Mark in the cell.
    pub mark: Option<Mark>,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// Everything needed to draw the board at one move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    status: String,
    cells: [CellView; CELL_COUNT],
    winning_line: Option<WinningLine>,
    move_index: usize,
}

impl BoardView {
    /// Builds the view for `board` shown at history position `move_index`.
    #[instrument]
    pub fn build(board: &Board, move_index: usize) -> Self {
        let winning_line = GamePhase::of(board).winning_line();
        let cells = std::array::from_fn(|index| CellView {
            index,
            mark: board.get(index).and_then(|c| c.mark()),
            highlighted: winning_line.is_some_and(|w| w.contains(index)),
        });
        Self {
            status: status_text(board, move_index),
            cells,
            winning_line,
            move_index,
        }
    }

    /// Cells grouped into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(BOARD_DIMENSION)
    }

    /// Resolves a cell activation into a move target.
    ///
    /// Returns `None` when the cell is occupied, off the board, or the game
    /// is already won at this snapshot.
    #[instrument(skip(self), fields(move_index = self.move_index))]
    pub fn click(&self, index: usize) -> Option<usize> {
        if self.winning_line.is_some() {
            debug!("Click ignored, game already won");
            return None;
        }
        match self.cells.get(index) {
            Some(cell) if cell.mark.is_none() => Some(index),
            _ => {
                debug!("Click ignored, cell unavailable");
                None
            }
        }
    }
}
