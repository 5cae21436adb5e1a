//! Move history with time travel.
//!
//! Snapshot 0 is always the empty board. `current` points at the snapshot
//! on display; playing from an earlier snapshot discards everything after it.

use tictactoe_rules::{Board, Mark, check_winner, is_full};
use tracing::{debug, instrument};

use crate::MoveError;

/// Ordered board snapshots plus the current move pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl MoveHistory {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// The snapshot on display.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Whose turn it is at the current pointer: X on even moves, O on odd.
    pub fn next_mark(&self) -> Mark {
        if self.current % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Plays the next mark at `cell` and returns the new move index.
    ///
    /// Rejected without change when the cell is taken or off the board, or
    /// when the current snapshot is already terminal.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, cell: usize) -> Result<usize, MoveError> {
        let board = self.current();
        if check_winner(board).is_some() || is_full(board) {
            return Err(MoveError::GameOver);
        }
        let mark = self.next_mark();
        let next = board.with_mark(cell, mark)?;

        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding forward history");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        debug!(%mark, cell, move_index = self.current, "Move applied");
        Ok(self.current)
    }

    /// Moves the pointer to `index` without touching the snapshots.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.snapshots.len() {
            return Err(MoveError::NoSuchMove(index));
        }
        self.current = index;
        Ok(())
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new()
    }
}
