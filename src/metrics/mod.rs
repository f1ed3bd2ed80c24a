//! Statistics collection and reporting for load-test runs
//!
//! This module is split by stage of a run's statistics:
//! - `summary`: the serializable accumulated snapshot
//! - `aggregate`: draining a local outcome stream into a summary
//! - `merge`: combining partial summaries from distributed instances
//! - `reporting`: deriving and rendering the human-readable report

pub mod aggregate;
pub mod merge;
pub mod reporting;
pub mod summary;

// Re-export public types for easier access
pub use aggregate::{Accumulated, Aggregator};
pub use merge::Merger;
pub use reporting::{ClassShare, Report, Reporter};
pub use summary::Summary;
