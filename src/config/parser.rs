//! Command-line argument parsing for the loadstat harness

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::RunConfig;
use super::defaults::Defaults;
use crate::errors::Result;

/// Raw command line of the harness binary
#[derive(Parser, Debug, Clone)]
#[command(
    name = "loadstat",
    version,
    about = "Render and merge serialized load-test summaries",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Enable verbose logging"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Harness operations
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a single serialized summary
    Report {
        #[arg(value_name = "FILE", help = "File holding one JSON-encoded summary")]
        file: PathBuf,
    },

    /// Merge serialized partial summaries from distributed instances
    Merge {
        #[arg(
            long = "url",
            value_name = "URL",
            default_value = Defaults::MERGED_URL,
            help = "Target URL recorded in the combined summary"
        )]
        url: String,

        #[arg(
            short = 'c',
            long = "connections",
            value_name = "COUNT",
            default_value_t = Defaults::CONNECTIONS,
            help = "Connection count recorded in the combined summary"
        )]
        connections: u32,

        #[arg(
            short = 't',
            long = "threads",
            value_name = "COUNT",
            default_value_t = Defaults::THREADS,
            help = "Thread count recorded in the combined summary"
        )]
        threads: u32,

        #[arg(
            value_name = "FILES",
            required = true,
            help = "Files each holding one JSON-encoded partial summary"
        )]
        files: Vec<PathBuf>,
    },
}

impl Cli {
    /// Parse from command line arguments
    pub fn parse_from_args() -> Self {
        Self::parse()
    }
}

impl Command {
    /// Run metadata for the merge subcommand, validated
    pub fn run_config(&self) -> Result<Option<RunConfig>> {
        match self {
            Command::Merge {
                url,
                connections,
                threads,
                ..
            } => RunConfig::checked(url.clone(), *connections, *threads).map(Some),
            Command::Report { .. } => Ok(None),
        }
    }
}
