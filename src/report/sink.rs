//! The seam between the game controller and score reporting.

use tracing::{debug, instrument};

use super::ScoreEvent;

/// Receives score events without blocking the caller.
///
/// Implementations must return promptly; delivery (and its failure) happens
/// out of band and never feeds back into game state.
pub trait ScoreSink: Send + Sync {
    /// Hands an event over for delivery.
    fn submit(&self, event: ScoreEvent);
}

/// Sink used when reporting is switched off. Events are logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSink;

impl ScoreSink for DisabledSink {
    #[instrument(skip(self, event), fields(kind = event.kind()))]
    fn submit(&self, event: ScoreEvent) {
        debug!(?event, "Score reporting disabled, dropping event");
    }
}
