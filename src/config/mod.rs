//! Configuration management for loadstat
//!
//! This module provides a layered approach to configuration:
//! - Run metadata carried into every summary
//! - CLI argument parsing for the harness binary
//! - Configuration validation
//! - Default value management

pub mod defaults;
pub mod parser;
pub mod validation;

use crate::errors::Result;

/// Metadata describing the run that produced a summary.
///
/// Supplied by the caller when an aggregator or merger is created and copied
/// verbatim into every summary they produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub url: String,
    pub connections: u32,
    pub threads: u32,
}

impl RunConfig {
    pub fn new(url: impl Into<String>, connections: u32, threads: u32) -> Self {
        Self {
            url: url.into(),
            connections,
            threads,
        }
    }

    /// Build and validate in one step
    pub fn checked(url: impl Into<String>, connections: u32, threads: u32) -> Result<Self> {
        let config = Self::new(url, connections, threads);
        validation::validate(&config)?;
        Ok(config)
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        println!("Run configuration:");
        println!("   Target:           {}", self.url);
        println!("   Connections:      {}", self.connections);
        println!("   Threads:          {}", self.threads);
        println!();
    }
}
