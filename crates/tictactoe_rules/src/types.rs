//! Core domain types: marks, cells and board snapshots.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::RulesError;
use crate::rules::BOARD_DIMENSION;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_DIMENSION * BOARD_DIMENSION;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Immutable 3x3 board snapshot, cells in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine optional marks.
    pub fn from_marks(marks: [Option<Mark>; CELL_COUNT]) -> Self {
        Self {
            cells: marks.map(Cell::from),
        }
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of this snapshot with `mark` written at `index`.
    ///
    /// The receiver is left untouched.
    #[instrument(skip(self))]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Self, RulesError> {
        match self.get(index) {
            None => Err(RulesError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(RulesError::Occupied(index)),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::Occupied(mark);
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(next.cells().iter().filter(|c| **c != Cell::Empty).count(), 1);
    }

    #[test]
    fn test_with_mark_rejects_occupied_and_out_of_bounds() {
        let board = Board::new().with_mark(0, Mark::O).unwrap();
        assert_eq!(board.with_mark(0, Mark::X), Err(RulesError::Occupied(0)));
        assert_eq!(board.with_mark(9, Mark::X), Err(RulesError::OutOfBounds(9)));
    }

    #[test]
    fn test_mark_display_and_opponent() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_serializes_with_mark() {
        let json = serde_json::to_string(&Cell::Occupied(Mark::O)).unwrap();
        assert_eq!(json, r#"{"Occupied":"O"}"#);
    }
}
