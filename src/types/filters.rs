// src/types/filters.rs
use super::job::EmploymentType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Options accepted by `fetch_jobs`.
///
/// `search`, `location`, `employment_type` and `limit` narrow the result set.
/// `count`, `geo` and `industry` are only forwarded upstream on a cache miss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilters {
    pub search: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub count: Option<u32>,
    pub geo: Option<String>,
    pub industry: Option<String>,
    pub limit: Option<usize>,
}

impl JobFilters {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_employment_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = Some(employment_type);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Result cap. Zero or unset falls back to the default of 50.
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_RESULT_LIMIT,
        }
    }

    /// Query parameters forwarded to the upstream API.
    pub fn upstream_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(count) = self.count {
            query.push(("count", count.to_string()));
        }
        if let Some(geo) = self.geo.as_deref().filter(|g| !g.is_empty()) {
            query.push(("geo", geo.to_string()));
        }
        if let Some(industry) = self.industry.as_deref().filter(|i| !i.is_empty()) {
            query.push(("industry", industry.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(JobFilters::default().effective_limit(), 50);
        assert_eq!(JobFilters::default().with_limit(0).effective_limit(), 50);
        assert_eq!(JobFilters::default().with_limit(7).effective_limit(), 7);
    }

    #[test]
    fn test_upstream_query_skips_unset_and_empty() {
        let filters = JobFilters {
            count: Some(100),
            geo: Some(String::new()),
            industry: Some("dev".to_string()),
            search: Some("rust".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.upstream_query(),
            vec![("count", "100".to_string()), ("industry", "dev".to_string())]
        );
    }
}
