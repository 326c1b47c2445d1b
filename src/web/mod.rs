// src/web/mod.rs
//! JSON API over the ingestion client, mounted at `/api`.

pub mod cors_utils;
pub mod handlers;
pub mod types;

pub use cors_utils::Cors;
pub use types::*;

use crate::config::IngestConfig;
use crate::ingest::JobIngestClient;
use crate::types::{Company, JobPosting};
use anyhow::Result;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket, State};
use tracing::info;

#[get("/jobs?<query..>")]
pub async fn get_jobs(
    query: JobQuery,
    ingest: &State<JobIngestClient>,
) -> Result<Json<Vec<JobPosting>>, (Status, Json<ErrorResponse>)> {
    handlers::get_jobs_handler(query, ingest).await
}

#[get("/jobs/companies")]
pub async fn get_companies(ingest: &State<JobIngestClient>) -> Json<Vec<Company>> {
    handlers::get_companies_handler(ingest).await
}

#[get("/health")]
pub async fn health(ingest: &State<JobIngestClient>) -> Json<HealthResponse> {
    handlers::health_handler(ingest).await
}

pub fn build_rocket(figment: rocket::figment::Figment, ingest: JobIngestClient) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(Cors)
        .manage(ingest)
        .mount(
            "/api",
            routes![
                get_jobs,
                get_companies,
                health,
                cors_utils::universal_options_handler
            ],
        )
}

pub async fn start_web_server(config: &IngestConfig) -> Result<()> {
    let ingest = JobIngestClient::new(config)?;

    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.port));

    info!("Starting job board API server");
    info!("Server: http://0.0.0.0:{}", config.port);
    info!("Upstream: {}", config.upstream_url);

    build_rocket(figment, ingest)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
