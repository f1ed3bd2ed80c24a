//! Combines serialized partial summaries from distributed instances

use crate::config::RunConfig;
use crate::metrics::reporting::Reporter;
use crate::metrics::summary::{Summary, average};

use std::io::{self, Write};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Merges partial summaries received as JSON strings
pub struct Merger<W: Write = io::Stdout> {
    config: RunConfig,
    reporter: Reporter<W>,
}

impl Merger<io::Stdout> {
    /// Merger that prints the combined report to stdout
    pub fn new(config: RunConfig) -> Self {
        Self::with_reporter(config, Reporter::stdout())
    }
}

impl<W: Write> Merger<W> {
    pub fn with_reporter(config: RunConfig, reporter: Reporter<W>) -> Self {
        Self { config, reporter }
    }

    /// Merge every partial summary currently pending on `rx`.
    ///
    /// Returns `None` without touching anything when nothing is pending: the
    /// channel is peeked, never awaited. Entries that fail to decode are logged
    /// and left out. The merged `avg_duration` divides the summed durations by
    /// the number of entries pending at call time, not by the sample count.
    pub fn merge(&mut self, rx: &mut mpsc::Receiver<String>) -> Option<Summary> {
        let stat_count = rx.len();
        if stat_count == 0 {
            return None;
        }

        let mut combined = Summary::new(&self.config);
        let mut merged = 0usize;
        while let Ok(raw) = rx.try_recv() {
            match Summary::decode(&raw) {
                Ok(partial) => {
                    debug!(
                        "Merging partial summary from {} with {} samples",
                        partial.url,
                        partial.count()
                    );
                    combined.absorb(partial);
                    merged += 1;
                }
                Err(e) => error!("Skipping undecodable partial summary: {}", e),
            }
        }
        info!("Merged {} of {} partial summaries", merged, stat_count);

        combined.avg_duration = average(combined.duration, stat_count);

        if let Err(e) = self.reporter.render(&mut combined) {
            error!("Failed to render merged report: {}", e);
        }
        Some(combined)
    }

    pub fn reporter(&self) -> &Reporter<W> {
        &self.reporter
    }
}
