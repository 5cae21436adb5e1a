//! Fire-and-forget HTTP delivery of score events.

use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};

use super::{ReportError, ScoreEvent, ScoreSink};

/// Posts score events as JSON to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpScoreReporter {
    endpoint: String,
    client: reqwest::Client,
    runtime: Handle,
}

impl HttpScoreReporter {
    /// Creates a reporter that spawns its requests on `runtime`.
    #[instrument(skip(runtime))]
    pub fn new(endpoint: String, runtime: Handle) -> Self {
        Self::with_client(endpoint, reqwest::Client::new(), runtime)
    }

    /// Creates a reporter around a preconfigured HTTP client.
    #[instrument(skip(client, runtime))]
    pub fn with_client(endpoint: String, client: reqwest::Client, runtime: Handle) -> Self {
        info!("Creating score reporter");
        Self {
            endpoint,
            client,
            runtime,
        }
    }

    /// Target URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts one event and waits for the response.
    #[instrument(skip(self, event), fields(endpoint = %self.endpoint, kind = event.kind()))]
    pub async fn send(&self, event: &ScoreEvent) -> Result<(), ReportError> {
        let body = event.body();
        debug!(%body, "Posting score event");

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ReportError::new(format!(
                "Score server returned {}: {}",
                status, text
            )));
        }

        debug!(%status, "Score event delivered");
        Ok(())
    }
}

impl ScoreSink for HttpScoreReporter {
    #[instrument(skip(self, event), fields(kind = event.kind()))]
    fn submit(&self, event: ScoreEvent) {
        let reporter = self.clone();
        self.runtime.spawn(async move {
            if let Err(e) = reporter.send(&event).await {
                warn!(error = %e, kind = event.kind(), "Failed to report score event");
            }
        });
    }
}
