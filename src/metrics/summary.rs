//! Serializable snapshot of accumulated run statistics

use crate::config::RunConfig;
use crate::errors::Result;
use crate::outcome::{Outcome, ResponseClass};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Accumulated statistics for one run, or for a merged set of runs.
///
/// The JSON encoding uses PascalCase field names and integer nanoseconds for
/// every duration, which is the format partial reports travel in between
/// distributed instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Summary {
    pub url: String,
    pub connections: u32,
    pub threads: u32,
    #[serde(with = "nanos")]
    pub avg_duration: Duration,
    #[serde(with = "nanos")]
    pub duration: Duration,
    #[serde(with = "nanos")]
    pub sum: Duration,
    /// Latency samples in nanoseconds, arrival order until reported
    pub times: Vec<u64>,
    pub transferred: u64,
    pub resp200: u64,
    pub resp300: u64,
    pub resp400: u64,
    pub resp500: u64,
}

impl Summary {
    /// Empty summary carrying the run metadata of `config`
    pub fn new(config: &RunConfig) -> Self {
        Self {
            url: config.url.clone(),
            connections: config.connections,
            threads: config.threads,
            ..Default::default()
        }
    }

    /// Fold one outcome into the running totals
    pub fn record(&mut self, outcome: &Outcome) {
        self.sum += outcome.duration;
        self.times.push(duration_to_nanos(outcome.duration));
        self.transferred += outcome.size;

        if let Some(class) = outcome.class() {
            *self.class_count_mut(class) += 1;
        }
    }

    /// Fold a decoded partial summary into this one.
    ///
    /// Durations are summed rather than maxed, so a merged `duration` is the
    /// total of the constituent wall-clock times.
    pub fn absorb(&mut self, other: Summary) {
        self.duration += other.duration;
        self.sum += other.sum;
        self.times.extend(other.times);
        self.transferred += other.transferred;
        self.resp200 += other.resp200;
        self.resp300 += other.resp300;
        self.resp400 += other.resp400;
        self.resp500 += other.resp500;
    }

    /// Set the wall-clock duration and derive the per-sample average
    pub fn finish(&mut self, elapsed: Duration) {
        self.duration = elapsed;
        self.avg_duration = average(elapsed, self.times.len());
    }

    /// Number of samples recorded
    pub fn count(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn class_count(&self, class: ResponseClass) -> u64 {
        match class {
            ResponseClass::Success => self.resp200,
            ResponseClass::Redirect => self.resp300,
            ResponseClass::ClientError => self.resp400,
            ResponseClass::ServerError => self.resp500,
        }
    }

    fn class_count_mut(&mut self, class: ResponseClass) -> &mut u64 {
        match class {
            ResponseClass::Success => &mut self.resp200,
            ResponseClass::Redirect => &mut self.resp300,
            ResponseClass::ClientError => &mut self.resp400,
            ResponseClass::ServerError => &mut self.resp500,
        }
    }

    /// Sum of all four response-class counters
    pub fn classified_count(&self) -> u64 {
        ResponseClass::ALL
            .iter()
            .map(|class| self.class_count(*class))
            .sum()
    }

    /// Encode as JSON for transport to a merging instance
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON-encoded partial summary
    pub fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// `total / n`, or zero when `n` is zero
pub(crate) fn average(total: Duration, n: usize) -> Duration {
    if n == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / n as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[inline]
fn duration_to_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Serde adapter storing a `Duration` as integer nanoseconds
mod nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(super::duration_to_nanos(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}
