use loadstat::config::parser::{Cli, Command};
use loadstat::errors::{ErrorContext, Result};
use loadstat::{Merger, Reporter, RunConfig, Summary};

use std::path::{Path, PathBuf};
use std::process;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_from_args();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command).await {
        error!("loadstat failed: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run(command: Command) -> Result<()> {
    info!("loadstat {}", env!("CARGO_PKG_VERSION"));
    let run_config = command.run_config()?;

    match command {
        Command::Report { file } => report(&file).await,
        Command::Merge { files, .. } => {
            let config = run_config.with_config_context("merge requires run metadata")?;
            merge(config, files).await
        }
    }
}

/// Render one serialized summary
async fn report(file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file).await?;
    let mut summary = Summary::decode(&raw)?;
    Reporter::stdout().render(&mut summary)?;
    Ok(())
}

/// Feed every file through the merger as one partial summary
async fn merge(config: RunConfig, files: Vec<PathBuf>) -> Result<()> {
    config.print_summary();

    let (tx, mut rx) = mpsc::channel(files.len().max(1));
    for file in &files {
        match tokio::fs::read_to_string(file).await {
            Ok(raw) => tx.send(raw).await.with_config_context("partial channel closed")?,
            Err(e) => error!("Failed to read {}: {}", file.display(), e),
        }
    }
    drop(tx);

    if Merger::new(config).merge(&mut rx).is_none() {
        info!("No partial summaries to merge");
    }
    Ok(())
}

/// Initialize logging based on verbosity
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("loadstat={}", level)
            .parse()
            .expect("Invalid filter directive"),
    );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    if verbose {
        info!("Verbose logging enabled");
    }
}
