//! Game controller: the single owner of all game state.

use std::sync::Arc;

use derive_getters::Getters;
use tictactoe_rules::Mark;
use tracing::{debug, info, instrument, warn};

use crate::board_view::BoardView;
use crate::history::MoveHistory;
use crate::phase::GamePhase;
use crate::report::{ScoreEvent, ScoreSink};
use crate::{MoveError, StartError};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button text.
    pub description: String,
    /// Whether this is the snapshot on display.
    pub is_current: bool,
}

impl MoveEntry {
    fn describe(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }
}

/// Owns the history, the players and the display settings, and decides when
/// the score server is told about a game.
#[derive(Getters)]
pub struct GameController {
    history: MoveHistory,
    player_x: String,
    player_o: String,
    started: bool,
    sort_order: SortOrder,
    #[getter(skip)]
    sink: Arc<dyn ScoreSink>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("history", &self.history)
            .field("player_x", &self.player_x)
            .field("player_o", &self.player_o)
            .field("started", &self.started)
            .field("sort_order", &self.sort_order)
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Creates a controller in the not-started phase.
    #[instrument(skip(sink))]
    pub fn new(sink: Arc<dyn ScoreSink>) -> Self {
        info!("Creating GameController");
        Self {
            history: MoveHistory::new(),
            player_x: String::new(),
            player_o: String::new(),
            started: false,
            sort_order: SortOrder::default(),
            sink,
        }
    }

    /// Names the players and starts the game.
    ///
    /// Blank names are rejected before anything changes. On success the
    /// start event is handed to the score sink.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, player_x: &str, player_o: &str) -> Result<(), StartError> {
        if self.started {
            warn!("Start requested for a running game");
            return Err(StartError::AlreadyStarted);
        }
        let (player_x, player_o) = (player_x.trim(), player_o.trim());
        if player_x.is_empty() {
            return Err(StartError::BlankName(Mark::X));
        }
        if player_o.is_empty() {
            return Err(StartError::BlankName(Mark::O));
        }

        self.player_x = player_x.to_string();
        self.player_o = player_o.to_string();
        self.started = true;
        info!(player_x = %self.player_x, player_o = %self.player_o, "Game started");

        self.sink.submit(ScoreEvent::started(&self.player_x, &self.player_o));
        Ok(())
    }

    /// Plays the next mark at `cell`; returns the new move index.
    ///
    /// A rejected move leaves history and pointer untouched. Moves are only
    /// accepted on a live snapshot, so a move that lands on a won or drawn
    /// snapshot is always a fresh transition and submits one end event.
    #[instrument(skip(self), fields(current = self.history.current_move()))]
    pub fn play_move(&mut self, cell: usize) -> Result<usize, MoveError> {
        if !self.started {
            return Err(MoveError::NotStarted);
        }
        let index = self.history.play(cell)?;
        self.report_if_terminal();
        Ok(index)
    }

    /// Shows the snapshot at `index` without changing history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        self.history.jump_to(index)?;
        debug!(index, "Jumped to move");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Phase at the snapshot on display.
    pub fn phase(&self) -> GamePhase {
        if self.started {
            GamePhase::of(self.history.current())
        } else {
            GamePhase::NotStarted
        }
    }

    /// Name of the player using `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Render model of the snapshot on display.
    pub fn board_view(&self) -> BoardView {
        BoardView::build(self.history.current(), self.history.current_move())
    }

    /// Move list in display order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let current = self.history.current_move();
        let indices = 0..self.history.len();
        let ordered: Vec<usize> = match self.sort_order {
            SortOrder::Ascending => indices.collect(),
            SortOrder::Descending => indices.rev().collect(),
        };
        ordered
            .into_iter()
            .map(|index| MoveEntry {
                index,
                description: MoveEntry::describe(index),
                is_current: index == current,
            })
            .collect()
    }

    /// Submits the end event when the snapshot on display is terminal.
    fn report_if_terminal(&self) {
        let event = match GamePhase::of(self.history.current()) {
            GamePhase::Won(win) => ScoreEvent::won(&self.player_x, &self.player_o, win.winner),
            GamePhase::Draw => ScoreEvent::draw(&self.player_x, &self.player_o),
            GamePhase::InProgress | GamePhase::NotStarted => return,
        };
        info!(
            kind = event.kind(),
            move_index = self.history.current_move(),
            "Game over, reporting result"
        );
        self.sink.submit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisabledSink;

    fn controller() -> GameController {
        let mut controller = GameController::new(Arc::new(DisabledSink));
        controller.start_game("Ann", "Bob").unwrap();
        controller
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut controller = GameController::new(Arc::new(DisabledSink));
        controller.start_game("  Ann ", "Bob\t").unwrap();
        assert_eq!(controller.player_x(), "Ann");
        assert_eq!(controller.name_of(Mark::O), "Bob");
    }

    #[test]
    fn test_second_start_rejected() {
        let mut controller = controller();
        assert_eq!(
            controller.start_game("Cy", "Di"),
            Err(StartError::AlreadyStarted)
        );
        assert_eq!(controller.player_x(), "Ann");
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut controller = GameController::new(Arc::new(DisabledSink));
        assert_eq!(controller.play_move(0), Err(MoveError::NotStarted));
        assert_eq!(controller.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_move_entries_descriptions() {
        let mut controller = controller();
        controller.play_move(4).unwrap();
        controller.play_move(0).unwrap();
        let entries = controller.move_entries();
        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert!(entries[2].is_current);
    }

    #[test]
    fn test_sort_label() {
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort Ascending");
    }
}
