// src/ingest/filter.rs
use crate::types::{JobFilters, JobPosting};

/// Applies search, location and employment type filters in that order, then
/// caps the result. Order of the input is preserved.
pub fn apply_filters(jobs: Vec<JobPosting>, filters: &JobFilters) -> Vec<JobPosting> {
    let search = filters
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let location = filters
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase);

    jobs.into_iter()
        .filter(|job| match &search {
            Some(term) => matches_search(job, term),
            None => true,
        })
        .filter(|job| match &location {
            Some(place) => matches_location(job, place),
            None => true,
        })
        .filter(|job| match filters.employment_type {
            Some(wanted) => job.employment_type == wanted,
            None => true,
        })
        .take(filters.effective_limit())
        .collect()
}

fn matches_search(job: &JobPosting, term: &str) -> bool {
    job.title.to_lowercase().contains(term)
        || job.company.to_lowercase().contains(term)
        || job.description.to_lowercase().contains(term)
}

/// A location filter mentioning "remote" lets every posting through.
fn matches_location(job: &JobPosting, place: &str) -> bool {
    place.contains("remote") || job.location.to_lowercase().contains(place)
}
