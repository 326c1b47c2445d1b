// src/ingest/mod.rs
//! Job listing ingestion: fetch from the remote jobs API, normalize, cache,
//! and fall back to mock listings whenever the live path fails.

pub mod cache;
pub mod error;
pub mod filter;
pub mod heuristics;
pub mod mock_data;
pub mod transform;


pub use cache::{Clock, SystemClock, TimedCache};
pub use error::IngestError;

use crate::config::IngestConfig;
use crate::types::{Company, JobFilters, JobPosting, UpstreamResponse};
use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Page size requested upstream when deriving companies.
pub const COMPANY_FETCH_COUNT: u32 = 100;

/// Which path produced a result. Callers that only want data use
/// `into_data`; tests and logs can tell the paths apart.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Live(T),
    Cached(T),
    Fallback { data: T, reason: IngestError },
}

impl<T> FetchOutcome<T> {
    pub fn data(&self) -> &T {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Cached(data) => data,
            FetchOutcome::Fallback { data, .. } => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Cached(data) => data,
            FetchOutcome::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Live(_))
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, FetchOutcome::Cached(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&IngestError> {
        match self {
            FetchOutcome::Fallback { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub struct JobIngestClient {
    client: Client,
    upstream_url: String,
    clock: Arc<dyn Clock>,
    jobs_cache: Mutex<TimedCache<Vec<JobPosting>>>,
    companies_cache: Mutex<TimedCache<Vec<Company>>>,
}

impl JobIngestClient {
    pub fn new(config: &IngestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let ttl = config.cache_ttl()?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url.clone(),
            clock: Arc::new(SystemClock),
            jobs_cache: Mutex::new(TimedCache::new(ttl)),
            companies_cache: Mutex::new(TimedCache::new(ttl)),
        })
    }

    /// Replace the time source used for cache freshness and mock dates.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Filtered, capped job list. Never fails: upstream problems yield the
    /// filtered mock listings instead.
    pub async fn fetch_jobs(&self, filters: &JobFilters) -> Vec<JobPosting> {
        self.fetch_jobs_outcome(filters).await.into_data()
    }

    pub async fn fetch_companies(&self) -> Vec<Company> {
        self.fetch_companies_outcome().await.into_data()
    }

    pub async fn fetch_jobs_outcome(&self, filters: &JobFilters) -> FetchOutcome<Vec<JobPosting>> {
        let now = self.clock.now();

        let cached = lock(&self.jobs_cache).get(now);
        if let Some(jobs) = cached {
            debug!("Serving {} jobs from cache", jobs.len());
            return FetchOutcome::Cached(filter::apply_filters(jobs, filters));
        }

        match self.fetch_live(filters).await {
            Ok(jobs) => {
                info!("Fetched {} jobs from {}", jobs.len(), self.upstream_url);
                lock(&self.jobs_cache).set(jobs.clone(), self.clock.now());
                FetchOutcome::Live(filter::apply_filters(jobs, filters))
            }
            Err(reason) => {
                warn!("Error fetching live jobs, serving mock listings: {}", reason);
                let data = filter::apply_filters(mock_data::mock_jobs(now), filters);
                FetchOutcome::Fallback { data, reason }
            }
        }
    }

    pub async fn fetch_companies_outcome(&self) -> FetchOutcome<Vec<Company>> {
        let now = self.clock.now();

        let cached = lock(&self.companies_cache).get(now);
        if let Some(companies) = cached {
            debug!("Serving {} companies from cache", companies.len());
            return FetchOutcome::Cached(companies);
        }

        let filters = JobFilters::default().with_count(COMPANY_FETCH_COUNT);
        match self.fetch_jobs_outcome(&filters).await {
            FetchOutcome::Live(jobs) | FetchOutcome::Cached(jobs) => {
                let companies = transform::aggregate_companies(&jobs, &mut rand::thread_rng());
                info!(
                    "Derived {} companies from {} jobs",
                    companies.len(),
                    jobs.len()
                );
                lock(&self.companies_cache).set(companies.clone(), self.clock.now());
                FetchOutcome::Live(companies)
            }
            FetchOutcome::Fallback { data, reason } => {
                warn!("Error fetching companies, deriving from mock listings: {}", reason);
                let companies = mock_data::fallback_companies(&data, &mut rand::thread_rng());
                FetchOutcome::Fallback {
                    data: companies,
                    reason,
                }
            }
        }
    }

    async fn fetch_live(&self, filters: &JobFilters) -> Result<Vec<JobPosting>, IngestError> {
        info!("Fetching jobs from upstream: {}", self.upstream_url);

        let response = self
            .client
            .get(&self.upstream_url)
            .query(&filters.upstream_query())
            .send()
            .await
            .map_err(IngestError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status(status));
        }

        let body = response.bytes().await.map_err(IngestError::Transport)?;
        let payload: UpstreamResponse =
            serde_json::from_slice(&body).map_err(IngestError::Decode)?;

        let records = payload.jobs.unwrap_or_default();
        Ok(transform::transform_batch(
            &records,
            self.clock.now(),
            &mut rand::thread_rng(),
        ))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
