use anyhow::{Context, Result};
use clap::Parser;
use job_ingest::cli::{handle_command, JobBoardCli};
use job_ingest::IngestConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = JobBoardCli::parse();
    // Stderr only until the configured log file is known
    let bootstrap = fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(default_filter())
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, IngestConfig::load)?;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(default_filter())
        .init();

    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!("Upstream: {}", config.upstream_url);
    info!("Cache TTL: {}s", config.cache_ttl_secs);

    handle_command(cli, config).await
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
