//! Notification events and their JSON bodies.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_rules::Mark;

/// Body sent when a game starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StartReport {
    /// X player's name.
    pub player_x: String,
    /// O player's name.
    pub player_o: String,
}

/// Body sent when a game reaches a terminal position.
///
/// `winner` and `loser` are `null` for a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct EndReport {
    /// X player's name.
    pub player_x: String,
    /// O player's name.
    pub player_o: String,
    /// Winner's name.
    pub winner: Option<String>,
    /// Loser's name.
    pub loser: Option<String>,
}

/// Something worth telling the score server about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreEvent {
    /// Both players were named and the game began.
    Started(StartReport),
    /// A line was completed by `winner`.
    Won {
        /// Winning mark.
        winner: Mark,
        /// Names and result.
        report: EndReport,
    },
    /// The board filled up without a line.
    Draw(EndReport),
}

impl ScoreEvent {
    /// Builds the start event.
    pub fn started(player_x: &str, player_o: &str) -> Self {
        ScoreEvent::Started(StartReport::new(player_x.to_string(), player_o.to_string()))
    }

    /// Builds the win event, mapping marks to names.
    pub fn won(player_x: &str, player_o: &str, winner: Mark) -> Self {
        let (winner_name, loser_name) = match winner {
            Mark::X => (player_x, player_o),
            Mark::O => (player_o, player_x),
        };
        ScoreEvent::Won {
            winner,
            report: EndReport::new(
                player_x.to_string(),
                player_o.to_string(),
                Some(winner_name.to_string()),
                Some(loser_name.to_string()),
            ),
        }
    }

    /// Builds the draw event.
    pub fn draw(player_x: &str, player_o: &str) -> Self {
        ScoreEvent::Draw(EndReport::new(
            player_x.to_string(),
            player_o.to_string(),
            None,
            None,
        ))
    }

    /// JSON body posted for this event.
    pub fn body(&self) -> serde_json::Value {
        let body = match self {
            ScoreEvent::Started(report) => serde_json::to_value(report),
            ScoreEvent::Won { report, .. } | ScoreEvent::Draw(report) => {
                serde_json::to_value(report)
            }
        };
        // Plain string fields always serialize.
        body.unwrap_or(serde_json::Value::Null)
    }

    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreEvent::Started(_) => "start",
            ScoreEvent::Won { .. } => "won",
            ScoreEvent::Draw(_) => "draw",
        }
    }
}
