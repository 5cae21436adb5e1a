//! Name entry screen: both players type their names before the first move.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_rules::Mark;
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_help, draw_modal, draw_title};
use crate::{GameController, StartError};

/// Text shown when a name is missing.
pub const MISSING_NAMES_ALERT: &str = "Please enter both players' names!";

/// State for the name entry screen.
#[derive(Debug, Default, Getters)]
pub struct NameEntryScreen {
    player_x: String,
    player_o: String,
    focus: Option<Mark>,
    alert: Option<String>,
}

impl NameEntryScreen {
    /// Creates the screen with the X field focused.
    #[instrument]
    pub fn new() -> Self {
        Self {
            focus: Some(Mark::X),
            ..Self::default()
        }
    }

    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            Some(Mark::O) => &mut self.player_o,
            _ => &mut self.player_x,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = Some(self.focus.map_or(Mark::X, Mark::opponent));
    }

    /// Tries to start the game with the typed names.
    #[instrument(skip(self, game))]
    fn submit(&mut self, game: &mut GameController) -> ScreenTransition {
        match game.start_game(&self.player_x, &self.player_o) {
            Ok(()) => {
                info!("Players named, entering game");
                ScreenTransition::GoToInGame
            }
            Err(StartError::BlankName(mark)) => {
                debug!(%mark, "Start rejected, name missing");
                self.alert = Some(MISSING_NAMES_ALERT.to_string());
                self.focus = Some(mark);
                ScreenTransition::Stay
            }
            Err(StartError::AlreadyStarted) => ScreenTransition::GoToInGame,
        }
    }

    fn input_block(&self, mark: Mark, title: &'static str) -> Paragraph<'_> {
        let value = match mark {
            Mark::X => self.player_x.as_str(),
            Mark::O => self.player_o.as_str(),
        };
        let style = if self.focus == Some(mark) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(value)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title))
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _game))]
    fn render(&self, frame: &mut Frame, _game: &GameController) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        draw_title(frame, chunks[0], "Tic-Tac-Toe");
        frame.render_widget(
            self.input_block(Mark::X, "Who's gonna play the X today?"),
            chunks[1],
        );
        frame.render_widget(
            self.input_block(Mark::O, "And for the O, what's your name buddy?"),
            chunks[2],
        );
        draw_help(
            frame,
            chunks[4],
            "Type name | Tab: Switch field | Enter: Start Game | Esc: Quit",
        );

        if let Some(alert) = &self.alert {
            draw_modal(frame, "Start Game", alert);
        }
    }

    #[instrument(skip(self, key, game))]
    fn handle_key(&mut self, key: KeyEvent, game: &mut GameController) -> ScreenTransition {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Char(c) => {
                self.focused_field().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_field().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.switch_focus();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(game),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisabledSink;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut NameEntryScreen, game: &mut GameController, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), game);
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut game = GameController::new(Arc::new(DisabledSink));
        let mut screen = NameEntryScreen::new();
        type_text(&mut screen, &mut game, "Ann");
        screen.handle_key(key(KeyCode::Tab), &mut game);
        type_text(&mut screen, &mut game, "Bobb");
        screen.handle_key(key(KeyCode::Backspace), &mut game);
        assert_eq!(screen.player_x(), "Ann");
        assert_eq!(screen.player_o(), "Bob");
    }

    #[test]
    fn test_blank_name_raises_alert() {
        let mut game = GameController::new(Arc::new(DisabledSink));
        let mut screen = NameEntryScreen::new();
        type_text(&mut screen, &mut game, "Ann");
        let transition = screen.handle_key(key(KeyCode::Enter), &mut game);
        assert_eq!(transition, ScreenTransition::Stay);
        assert_eq!(screen.alert().as_deref(), Some(MISSING_NAMES_ALERT));
        assert_eq!(*screen.focus(), Some(Mark::O));
        assert!(!*game.started());

        // Keys are swallowed until the alert is dismissed.
        type_text(&mut screen, &mut game, "zz");
        assert_eq!(screen.player_o(), "");
        screen.handle_key(key(KeyCode::Enter), &mut game);
        assert!(screen.alert().is_none());
    }

    #[test]
    fn test_enter_with_names_starts_game() {
        let mut game = GameController::new(Arc::new(DisabledSink));
        let mut screen = NameEntryScreen::new();
        type_text(&mut screen, &mut game, "Ann");
        screen.handle_key(key(KeyCode::Down), &mut game);
        type_text(&mut screen, &mut game, "Bob");
        let transition = screen.handle_key(key(KeyCode::Enter), &mut game);
        assert_eq!(transition, ScreenTransition::GoToInGame);
        assert!(*game.started());
    }

    #[test]
    fn test_q_is_a_name_character() {
        let mut game = GameController::new(Arc::new(DisabledSink));
        let mut screen = NameEntryScreen::new();
        let transition = screen.handle_key(key(KeyCode::Char('q')), &mut game);
        assert_eq!(transition, ScreenTransition::Stay);
        assert_eq!(screen.player_x(), "q");
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &mut game),
            ScreenTransition::Quit
        );
    }
}
