// src/web/handlers/job_handlers.rs
use crate::ingest::JobIngestClient;
use crate::types::{Company, JobPosting};
use crate::web::types::{ErrorResponse, JobQuery};

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

pub async fn get_jobs_handler(
    query: JobQuery,
    ingest: &State<JobIngestClient>,
) -> Result<Json<Vec<JobPosting>>, (Status, Json<ErrorResponse>)> {
    let filters = query.into_filters().map_err(|e| {
        warn!("Rejected job query: {}", e);
        (Status::BadRequest, Json(ErrorResponse::new(e.to_string())))
    })?;

    let outcome = ingest.fetch_jobs_outcome(&filters).await;
    if let Some(reason) = outcome.fallback_reason() {
        info!("Serving mock jobs: {}", reason);
    }

    Ok(Json(outcome.into_data()))
}

pub async fn get_companies_handler(ingest: &State<JobIngestClient>) -> Json<Vec<Company>> {
    Json(ingest.fetch_companies().await)
}
