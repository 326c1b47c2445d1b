//! Remote job listing ingestion for the job board: fetches postings from the
//! upstream remote-jobs API, normalizes them, caches them for ten minutes and
//! serves mock listings whenever the upstream is unavailable.

pub mod cli;
pub mod config;
pub mod ingest;
pub mod types;
pub mod web;

pub use config::IngestConfig;
pub use ingest::{FetchOutcome, JobIngestClient};
pub use types::{Company, EmploymentType, ExperienceLevel, JobFilters, JobPosting};
pub use web::start_web_server;
