//! Score reporting: outbound notifications of game starts and results.

mod error;
mod events;
mod http;
mod sink;

pub use error::ReportError;
pub use events::{EndReport, ScoreEvent, StartReport};
pub use http::HttpScoreReporter;
pub use sink::{DisabledSink, ScoreSink};
