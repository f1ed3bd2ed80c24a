//! Domain-specific error types for loadstat
//!
//! This module provides structured error types using `thiserror` for
//! precise and ergonomic error handling throughout the crate.

use thiserror::Error;

/// Main error type for loadstat
#[derive(Error, Debug)]
pub enum StatsError {
    /// Configuration-related errors (CLI parsing, validation, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Summary encoding or decoding errors
    #[error("Summary codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Report output and input file errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Percentiles requested over a summary without samples
    #[error("Summary has no latency samples to report")]
    EmptySummary,

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type using StatsError
pub type Result<T> = std::result::Result<T, StatsError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    fn with_config_context(self, msg: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_config_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| StatsError::Config(format!("{}: {}", msg, e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn with_config_context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| StatsError::Config(msg.to_string()))
    }
}

// Convenience constructors
impl StatsError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatsError::Config(msg.into())
    }
}
