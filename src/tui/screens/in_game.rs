//! In-game screen: the board, the status line and the move list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_rules::Mark;
use tracing::{debug, instrument};

use crate::GameController;
use crate::tui::input::{digit_cell, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui::{draw_board, draw_help, draw_title};

/// Which pane receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

/// State for the in-game screen.
#[derive(Debug, Default, Getters)]
pub struct InGameScreen {
    cursor: usize,
    focus: Focus,
    /// History index highlighted in the move list.
    selected_move: usize,
}

impl InGameScreen {
    /// Creates the screen with the cursor on the centre cell.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cursor: 4,
            ..Self::default()
        }
    }

    /// Routes a cell activation through the board view, then the controller.
    #[instrument(skip(self, game))]
    fn activate_cell(&mut self, cell: usize, game: &mut GameController) {
        self.cursor = cell;
        let Some(cell) = game.board_view().click(cell) else {
            return;
        };
        match game.play_move(cell) {
            Ok(index) => self.selected_move = index,
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    /// Moves the move-list selection one row in display order.
    fn step_selection(&mut self, game: &GameController, forward: bool) {
        let entries = game.move_entries();
        let row = entries
            .iter()
            .position(|e| e.index == self.selected_move)
            .unwrap_or(0);
        let row = if forward {
            (row + 1).min(entries.len().saturating_sub(1))
        } else {
            row.saturating_sub(1)
        };
        if let Some(entry) = entries.get(row) {
            self.selected_move = entry.index;
        }
    }

    fn render_moves(&self, frame: &mut Frame, area: ratatui::layout::Rect, game: &GameController) {
        let entries = game.move_entries();
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                let style = if entry.is_current {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{}. {}", row + 1, entry.description)).style(style)
            })
            .collect();

        let title = format!("History [s: {}]", game.sort_order().toggle_label());
        let border_style = if self.focus == Focus::Moves {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if self.focus == Focus::Moves {
            state.select(entries.iter().position(|e| e.index == self.selected_move));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Screen for InGameScreen {
    #[instrument(skip(self, frame, game))]
    fn render(&self, frame: &mut Frame, game: &GameController) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = format!(
            "Tic-Tac-Toe: {} (X) vs {} (O)",
            game.name_of(Mark::X),
            game.name_of(Mark::O)
        );
        draw_title(frame, chunks[0], &title);

        let view = game.board_view();
        let status = Paragraph::new(view.status().as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[1]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[2]);

        let cursor = (self.focus == Focus::Board).then_some(self.cursor);
        draw_board(frame, panes[0], &view, cursor);
        self.render_moves(frame, panes[1], game);

        draw_help(
            frame,
            chunks[3],
            "←↑↓→: Move | Enter/1-9: Play | Tab: History | s: Sort | q: Quit",
        );
    }

    #[instrument(skip(self, key, game))]
    fn handle_key(&mut self, key: KeyEvent, game: &mut GameController) -> ScreenTransition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ScreenTransition::Quit;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return ScreenTransition::Quit;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                game.toggle_sort_order();
                return ScreenTransition::Stay;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.selected_move = game.history().current_move();
                        Focus::Moves
                    }
                    Focus::Moves => Focus::Board,
                };
                return ScreenTransition::Stay;
            }
            code => {
                if let Some(cell) = digit_cell(code) {
                    self.activate_cell(cell, game);
                    return ScreenTransition::Stay;
                }
            }
        }

        match (self.focus, key.code) {
            (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.activate_cell(self.cursor, game);
            }
            (Focus::Board, code) => self.cursor = move_cursor(self.cursor, code),
            (Focus::Moves, KeyCode::Up) => self.step_selection(game, false),
            (Focus::Moves, KeyCode::Down) => self.step_selection(game, true),
            (Focus::Moves, KeyCode::Enter | KeyCode::Char(' ')) => {
                if let Err(e) = game.jump_to(self.selected_move) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            (Focus::Moves, _) => {}
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisabledSink;
    use crate::tui::screens::NameEntryScreen;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started_game() -> GameController {
        let mut game = GameController::new(Arc::new(DisabledSink));
        game.start_game("Ann", "Bob").unwrap();
        game
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut game = started_game();
        let mut screen = InGameScreen::new();
        screen.handle_key(key(KeyCode::Enter), &mut game);
        screen.handle_key(key(KeyCode::Left), &mut game);
        screen.handle_key(key(KeyCode::Char(' ')), &mut game);
        let board = game.history().current();
        assert_eq!(board.get(4).and_then(|c| c.mark()), Some(Mark::X));
        assert_eq!(board.get(3).and_then(|c| c.mark()), Some(Mark::O));
    }

    #[test]
    fn test_digit_on_occupied_cell_is_ignored() {
        let mut game = started_game();
        let mut screen = InGameScreen::new();
        screen.handle_key(key(KeyCode::Char('5')), &mut game);
        screen.handle_key(key(KeyCode::Char('5')), &mut game);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_history_pane_jumps() {
        let mut game = started_game();
        let mut screen = InGameScreen::new();
        for c in ['1', '2', '3'] {
            screen.handle_key(key(KeyCode::Char(c)), &mut game);
        }
        screen.handle_key(key(KeyCode::Tab), &mut game);
        screen.handle_key(key(KeyCode::Up), &mut game);
        screen.handle_key(key(KeyCode::Up), &mut game);
        screen.handle_key(key(KeyCode::Enter), &mut game);
        assert_eq!(game.history().current_move(), 1);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_history_selection_follows_descending_order() {
        let mut game = started_game();
        let mut screen = InGameScreen::new();
        for c in ['1', '2'] {
            screen.handle_key(key(KeyCode::Char(c)), &mut game);
        }
        screen.handle_key(key(KeyCode::Char('s')), &mut game);
        screen.handle_key(key(KeyCode::Tab), &mut game);
        // Descending: move 2 is on top, Down walks towards game start.
        screen.handle_key(key(KeyCode::Down), &mut game);
        assert_eq!(*screen.selected_move(), 1);
    }

    #[test]
    fn test_render_shows_status_and_history() {
        let mut game = started_game();
        game.play_move(0).unwrap();
        let screen = InGameScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| screen.render(f, &game)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Next player: O, You are at move #2"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Sort Descending"));
    }

    #[test]
    fn test_history_rows_numbered_by_position() {
        let mut game = started_game();
        game.play_move(0).unwrap();
        game.play_move(1).unwrap();
        game.toggle_sort_order();
        let screen = InGameScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| screen.render(f, &game)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("1. Go to move #2"));
        assert!(text.contains("3. Go to game start"));
        assert!(text.contains("Sort Ascending"));
    }

    #[test]
    fn test_render_name_entry_alert() {
        let mut game = GameController::new(Arc::new(DisabledSink));
        let mut screen = NameEntryScreen::new();
        screen.handle_key(key(KeyCode::Enter), &mut game);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| screen.render(f, &game)).unwrap();
        assert!(screen_text(&terminal).contains("Please enter both players' names!"));
    }
}
