//! Errors raised by the game controller.

use derive_more::{Display, Error};
use tictactoe_rules::{Mark, RulesError};

/// Why a game could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StartError {
    /// A player's name is empty or whitespace.
    #[display("Please enter both players' names! ({} is missing)", _0)]
    BlankName(#[error(not(source))] Mark),

    /// Names are fixed once the game is running.
    #[display("Game has already started")]
    AlreadyStarted,
}

/// Why a move or jump was rejected. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Moves are only accepted after the players are named.
    #[display("Game has not started")]
    NotStarted,

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The current snapshot is already won or drawn.
    #[display("Game is already over at this move")]
    GameOver,

    /// Jump target is past the end of the history.
    #[display("No move #{} in history", _0)]
    NoSuchMove(#[error(not(source))] usize),
}

impl From<RulesError> for MoveError {
    fn from(err: RulesError) -> Self {
        match err {
            RulesError::OutOfBounds(index) => MoveError::OutOfBounds(index),
            RulesError::Occupied(index) => MoveError::CellOccupied(index),
        }
    }
}
