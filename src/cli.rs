// src/cli.rs
use crate::config::IngestConfig;
use crate::ingest::JobIngestClient;
use crate::types::{EmploymentType, JobFilters};
use crate::web::start_web_server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Remote job listing ingestion for the job board")]
pub struct JobBoardCli {
    #[command(subcommand)]
    pub command: JobBoardCommand,
}

#[derive(Subcommand)]
pub enum JobBoardCommand {
    /// Serve the JSON API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch job listings and print them as JSON
    Jobs {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// full_time, part_time, contract or internship
        #[arg(long = "type")]
        employment_type: Option<EmploymentType>,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long)]
        geo: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Derive companies from the current listings and print them as JSON
    Companies,
}

pub async fn handle_command(cli: JobBoardCli, mut config: IngestConfig) -> Result<()> {
    match cli.command {
        JobBoardCommand::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            start_web_server(&config).await
        }

        JobBoardCommand::Jobs {
            search,
            location,
            employment_type,
            count,
            geo,
            industry,
            limit,
        } => {
            let filters = JobFilters {
                search,
                location,
                employment_type,
                count,
                geo,
                industry,
                limit,
            };

            let client = JobIngestClient::new(&config)?;
            let outcome = client.fetch_jobs_outcome(&filters).await;
            if let Some(reason) = outcome.fallback_reason() {
                info!("Upstream unavailable, printing mock jobs: {}", reason);
            }

            let output = serde_json::to_string_pretty(outcome.data())
                .context("Failed to serialize jobs")?;
            println!("{}", output);
            Ok(())
        }

        JobBoardCommand::Companies => {
            let client = JobIngestClient::new(&config)?;
            let companies = client.fetch_companies().await;

            let output = serde_json::to_string_pretty(&companies)
                .context("Failed to serialize companies")?;
            println!("{}", output);
            Ok(())
        }
    }
}
