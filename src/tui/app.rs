//! Front-end state machine: which screen is active and the event loop.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::GameController;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{InGameScreen, NameEntryScreen};

/// Active screen.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    InGame(InGameScreen),
}

/// Owns the game controller and routes input to the active screen.
#[derive(Debug)]
pub struct App {
    game: GameController,
    screen: ActiveScreen,
}

impl App {
    /// Creates the app, starting on the name entry screen unless the game
    /// is already running.
    #[instrument(skip(game))]
    pub fn new(game: GameController) -> Self {
        let screen = if *game.started() {
            ActiveScreen::InGame(InGameScreen::new())
        } else {
            ActiveScreen::NameEntry(NameEntryScreen::new())
        };
        Self { game, screen }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::NameEntry(s) => s.render(frame, &self.game),
            ActiveScreen::InGame(s) => s.render(frame, &self.game),
        }
    }

    /// Handles one key press. Returns `false` when the user quits.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let transition = match &mut self.screen {
            ActiveScreen::NameEntry(s) => s.handle_key(key, &mut self.game),
            ActiveScreen::InGame(s) => s.handle_key(key, &mut self.game),
        };
        debug!(?transition, "Screen transition");
        match transition {
            ScreenTransition::Stay => true,
            ScreenTransition::GoToInGame => {
                info!("Navigating to InGame");
                self.screen = ActiveScreen::InGame(InGameScreen::new());
                true
            }
            ScreenTransition::Quit => false,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("User quit");
                    return Ok(());
                }
            }

            // Let spawned score reports make progress.
            sleep(Duration::from_millis(10)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisabledSink;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_name_entry_to_game_to_quit() {
        let mut app = App::new(GameController::new(Arc::new(DisabledSink)));
        for c in "Ann".chars() {
            assert!(app.handle_key(key(KeyCode::Char(c))));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "Bob".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert!(app.handle_key(key(KeyCode::Enter)));
        assert!(matches!(app.screen, ActiveScreen::InGame(_)));

        // On the board 'q' quits instead of typing.
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
    }
}
