// src/ingest/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Reasons the live path was abandoned. Only ever surfaced inside
/// `FetchOutcome::Fallback`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IngestError {
    pub fn is_status(&self) -> bool {
        matches!(self, IngestError::Status(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, IngestError::Decode(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, IngestError::Transport(_))
    }
}
