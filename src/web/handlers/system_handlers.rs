// src/web/handlers/system_handlers.rs
use crate::ingest::JobIngestClient;
use crate::web::types::HealthResponse;

use rocket::serde::json::Json;
use rocket::State;

pub async fn health_handler(ingest: &State<JobIngestClient>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        upstream: ingest.upstream_url().to_string(),
    })
}
