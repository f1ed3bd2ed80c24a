//! loadstat: streaming statistics for concurrent load generators.
//!
//! Workers push one [`Outcome`] per completed request into an outcome channel.
//! A single [`Aggregator`] drains that channel into a [`Summary`], renders the
//! report and hands back a JSON encoding of the summary. Encoded summaries from
//! independently-run instances can be combined by a [`Merger`] into one report.

pub mod config;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod outcome;

pub use config::RunConfig;
pub use errors::{Result, StatsError};
pub use metrics::{Accumulated, Aggregator, Merger, Report, Reporter, Summary};
pub use outcome::{Outcome, ResponseClass, outcome_channel};
