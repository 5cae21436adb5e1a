//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_rules::BOARD_DIMENSION;

/// Moves the board cursor (a cell index) one step with the arrow keys.
///
/// The cursor stops at the edges instead of wrapping.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / BOARD_DIMENSION, cursor % BOARD_DIMENSION);
    let last = BOARD_DIMENSION - 1;

    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < last => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < last => (row + 1, col),
        _ => (row, col),
    };
    row * BOARD_DIMENSION + col
}

/// Maps the digit keys 1-9 to cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
