// src/web/types.rs
use crate::types::{EmploymentType, JobFilters};
use anyhow::Result;
use rocket::form::FromForm;
use rocket::serde::Serialize;

/// Query string accepted by `GET /api/jobs`.
#[derive(Debug, Default, FromForm)]
pub struct JobQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    #[field(name = "type")]
    pub employment_type: Option<String>,
    pub count: Option<u32>,
    pub geo: Option<String>,
    pub industry: Option<String>,
    pub limit: Option<usize>,
}

impl JobQuery {
    pub fn into_filters(self) -> Result<JobFilters> {
        let employment_type = match self.employment_type.as_deref() {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<EmploymentType>()?),
            _ => None,
        };

        Ok(JobFilters {
            search: self.search,
            location: self.location,
            employment_type,
            count: self.count,
            geo: self.geo,
            industry: self.industry,
            limit: self.limit,
        })
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_filters_parses_type() {
        let query = JobQuery {
            search: Some("rust".to_string()),
            employment_type: Some("contract".to_string()),
            limit: Some(5),
            ..Default::default()
        };
        let filters = query.into_filters().unwrap();

        assert_eq!(filters.search.as_deref(), Some("rust"));
        assert_eq!(filters.employment_type, Some(EmploymentType::Contract));
        assert_eq!(filters.effective_limit(), 5);
    }

    #[test]
    fn test_into_filters_rejects_unknown_type() {
        let query = JobQuery {
            employment_type: Some("gig".to_string()),
            ..Default::default()
        };
        assert!(query.into_filters().is_err());

        let empty = JobQuery {
            employment_type: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.into_filters().unwrap().employment_type, None);
    }
}
