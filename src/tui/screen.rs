//! Screen trait and transition type for the front-end state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::GameController;

/// The result of handling a key on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Players are named; show the board.
    GoToInGame,
    /// Exit the application.
    Quit,
}

/// Implemented by each screen.
///
/// Screens keep only presentation state (focus, cursor, text being typed).
/// Game state lives in the [`GameController`] passed to every call.
pub trait Screen {
    /// Draws the screen.
    fn render(&self, frame: &mut Frame, game: &GameController);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, game: &mut GameController) -> ScreenTransition;
}
