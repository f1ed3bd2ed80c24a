//! Drains the outcome stream of a local run into a summary

use crate::config::RunConfig;
use crate::constants::DEBUG_LOG_INTERVAL;
use crate::metrics::reporting::{Report, Reporter};
use crate::metrics::summary::Summary;
use crate::outcome::Outcome;

use std::io::{self, Write};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Everything a finished local run hands back to its caller
#[derive(Debug)]
pub struct Accumulated {
    pub summary: Summary,
    /// `None` when the run produced no samples
    pub report: Option<Report>,
    /// JSON encoding of `summary`, empty if encoding failed
    pub encoded: String,
}

/// Single consumer of the outcome stream produced by all workers
pub struct Aggregator<W: Write = io::Stdout> {
    summary: Summary,
    reporter: Reporter<W>,
}

impl Aggregator<io::Stdout> {
    /// Aggregator that prints its report to stdout
    pub fn new(config: &RunConfig) -> Self {
        Self::with_reporter(config, Reporter::stdout())
    }
}

impl<W: Write> Aggregator<W> {
    pub fn with_reporter(config: &RunConfig, reporter: Reporter<W>) -> Self {
        Self {
            summary: Summary::new(config),
            reporter,
        }
    }

    /// Drain `rx` until every sender has been dropped, then finalize.
    ///
    /// There is no timeout: a producer that never closes its sender stalls
    /// the drain indefinitely.
    pub async fn accumulate(
        mut self,
        mut rx: mpsc::Receiver<Outcome>,
        run_start: Instant,
    ) -> Accumulated {
        let mut consumed = 0u64;
        while let Some(outcome) = rx.recv().await {
            self.summary.record(&outcome);
            consumed += 1;
            if consumed % DEBUG_LOG_INTERVAL == 0 {
                debug!("Aggregated {} outcomes", consumed);
            }
        }
        info!("Outcome stream closed after {} outcomes", consumed);

        self.finalize(run_start)
    }

    /// Stamp the run duration, render the report and encode the summary
    fn finalize(mut self, run_start: Instant) -> Accumulated {
        self.summary.finish(run_start.elapsed());

        let report = if self.summary.is_empty() {
            warn!("No outcomes were recorded, skipping report");
            None
        } else {
            match self.reporter.render(&mut self.summary) {
                Ok(report) => Some(report),
                Err(e) => {
                    error!("Failed to render report: {}", e);
                    None
                }
            }
        };

        let encoded = self.summary.encode().unwrap_or_else(|e| {
            error!("Failed to encode summary: {}", e);
            String::new()
        });

        Accumulated {
            summary: self.summary,
            report,
            encoded,
        }
    }
}

impl<W: Write + Send + 'static> Aggregator<W> {
    /// Run the drain loop as its own task
    pub fn spawn(self, rx: mpsc::Receiver<Outcome>, run_start: Instant) -> JoinHandle<Accumulated> {
        tokio::spawn(self.accumulate(rx, run_start))
    }
}
