//! Report derivation and output formatting

use crate::constants::{BYTES_PER_KIB, NANOS_PER_MILLI, TAIL_PERCENTILE};
use crate::errors::{Result, StatsError};
use crate::metrics::summary::Summary;
use crate::outcome::ResponseClass;

use std::fmt;
use std::io::{self, Write};

const BENCHMARK_BANNER: &str = "==========================BENCHMARK==========================";
const TIMES_BANNER: &str = "============================TIMES============================";
const RESPONSES_BANNER: &str = "==========================RESPONSES==========================";

/// Count and integer share of one response class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassShare {
    pub class: ResponseClass,
    pub count: u64,
    /// `count * 100 / total`, truncated
    pub percent: u64,
}

/// Human-readable metrics derived from a summary
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub url: String,
    pub connections: u32,
    pub threads: u32,
    pub total_calls: usize,
    pub elapsed_secs: f64,
    pub avg_request_ms: f64,
    pub requests_per_second: f64,
    pub median_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
    pub transferred_mb: f64,
    pub transfer_rate_mbps: f64,
    pub responses: [ClassShare; 4],
}

impl Report {
    /// Derive report metrics, sorting `summary.times` in place first.
    ///
    /// Fails with [`StatsError::EmptySummary`] when there are no samples to
    /// index into.
    pub fn from_summary(summary: &mut Summary) -> Result<Self> {
        if summary.is_empty() {
            return Err(StatsError::EmptySummary);
        }

        summary.times.sort_unstable();
        let times = &summary.times;
        let count = times.len();
        let elapsed_secs = summary.duration.as_secs_f64();
        let transferred_mb = summary.transferred as f64 / BYTES_PER_KIB / BYTES_PER_KIB;

        let responses = ResponseClass::ALL.map(|class| {
            let class_count = summary.class_count(class);
            ClassShare {
                class,
                count: class_count,
                percent: class_count * 100 / count as u64,
            }
        });

        Ok(Self {
            url: summary.url.clone(),
            connections: summary.connections,
            threads: summary.threads,
            total_calls: count,
            elapsed_secs,
            avg_request_ms: summary.sum.as_nanos() as f64 / count as f64 / NANOS_PER_MILLI,
            requests_per_second: count as f64 / elapsed_secs,
            median_ms: to_millis(times[median_index(count)]),
            p99_ms: to_millis(times[percentile_index(count, TAIL_PERCENTILE)]),
            max_ms: to_millis(times[count - 1]),
            transferred_mb,
            transfer_rate_mbps: transferred_mb / elapsed_secs,
            responses,
        })
    }
}

/// Lower median index for a non-empty sample set
#[inline]
pub fn median_index(count: usize) -> usize {
    (count - 1) / 2
}

/// Floor-division percentile index for a non-empty sample set
#[inline]
pub fn percentile_index(count: usize, percentile: usize) -> usize {
    (count * percentile / 100).min(count - 1)
}

#[inline]
fn to_millis(nanos: u64) -> f64 {
    nanos as f64 / NANOS_PER_MILLI
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BENCHMARK_BANNER)?;
        writeln!(f, "URL:\t\t\t\t{}\n", self.url)?;
        writeln!(f, "Used Connections:\t\t{}", self.connections)?;
        writeln!(f, "Used Threads:\t\t\t{}", self.threads)?;
        writeln!(f, "Total number of calls:\t\t{}", self.total_calls)?;
        writeln!(f)?;

        writeln!(f, "{}", TIMES_BANNER)?;
        writeln!(f, "Total time passed:\t\t{:.2}s", self.elapsed_secs)?;
        writeln!(f, "Avg time per request:\t\t{:.2}ms", self.avg_request_ms)?;
        writeln!(f, "Requests per second:\t\t{:.2}", self.requests_per_second)?;
        writeln!(f, "Median time per request:\t{:.2}ms", self.median_ms)?;
        writeln!(f, "99th percentile time:\t\t{:.2}ms", self.p99_ms)?;
        writeln!(f, "Slowest time for request:\t{:.2}ms", self.max_ms)?;
        writeln!(f, "Total Body bytes transferred:\t{:.2}MB", self.transferred_mb)?;
        writeln!(f, "Transfer rate:\t\t\t{:.2}MB/s", self.transfer_rate_mbps)?;
        writeln!(f)?;

        writeln!(f, "{}", RESPONSES_BANNER)?;
        for share in &self.responses {
            writeln!(
                f,
                "{} Responses:\t\t{}\t({}%)",
                share.class, share.count, share.percent
            )?;
        }
        Ok(())
    }
}

/// Renders summaries to an output sink, stdout unless told otherwise
#[derive(Debug)]
pub struct Reporter<W: Write = io::Stdout> {
    sink: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { sink: io::stdout() }
    }
}

impl Default for Reporter<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Sort, derive and write the report for `summary`
    pub fn render(&mut self, summary: &mut Summary) -> Result<Report> {
        let report = Report::from_summary(summary)?;
        write!(self.sink, "{}", report)?;
        self.sink.flush()?;
        Ok(report)
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
