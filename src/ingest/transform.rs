// src/ingest/transform.rs
//! Raw upstream records to `JobPosting`, and job batches to `Company` lists.

use super::heuristics::{
    company_logo_url, company_website, default_benefits, derive_tags, extract_benefits,
    extract_requirements, format_salary_amount, infer_experience_level, map_employment_type,
};
use crate::types::{Company, JobPosting, RawJob};
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::debug;

const DEFAULT_TITLE: &str = "Software Developer";
const DEFAULT_COMPANY: &str = "Tech Company";
const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_JOB_TYPE: &str = "Full-time";
const DEFAULT_SALARY: &str = "Competitive";
const DEFAULT_DESCRIPTION: &str = "Exciting opportunity to work with cutting-edge technology.";
const JOB_PAGE_BASE: &str = "https://jobicy.com/jobs";

// Jobicy lists remote roles only, so every live posting is remote.
const LIVE_POSTINGS_REMOTE: bool = true;

const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];
const INDUSTRIES: &[&str] = &[
    "Technology",
    "Software",
    "SaaS",
    "FinTech",
    "E-commerce",
    "Healthcare",
];
const CULTURE_TAGS: &[&str] = &[
    "Innovation",
    "Remote-first",
    "Diversity",
    "Growth",
    "Collaboration",
];
const TECH_STACK: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "JavaScript",
    "TypeScript",
    "AWS",
    "Docker",
];
const MAX_TECH_STACK: usize = 4;

/// Normalizes one upstream record. Every missing or mistyped field gets a
/// default, so this never fails.
pub fn transform_job<R: Rng + ?Sized>(value: &Value, now: DateTime<Utc>, rng: &mut R) -> JobPosting {
    let raw = RawJob::new(value);

    let raw_title = raw.first_text(&["jobTitle", "title"]);
    let raw_company = raw.first_text(&["companyName", "company"]);
    let raw_location = raw.first_text(&["jobGeo", "location"]);
    let raw_type = raw.text_or_first("jobType");
    let full_description = raw.text("jobDescription");
    let raw_industry = raw.text_or_first("jobIndustry");

    let heuristic_text = full_description
        .or_else(|| raw.text("description"))
        .unwrap_or_default();

    let location = raw_location.unwrap_or(DEFAULT_LOCATION).to_string();

    JobPosting {
        id: raw
            .id()
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string()),
        title: raw_title.unwrap_or(DEFAULT_TITLE).to_string(),
        company: raw_company.unwrap_or(DEFAULT_COMPANY).to_string(),
        job_type: raw_type.unwrap_or(DEFAULT_JOB_TYPE).to_string(),
        employment_type: map_employment_type(raw_type),
        salary: salary_text(&raw),
        description: raw
            .first_text(&["jobExcerpt", "description"])
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string(),
        requirements: extract_requirements(full_description),
        benefits: extract_benefits(full_description),
        posted_date: parse_posted_date(raw.text("pubDate"), now),
        experience_level: infer_experience_level(raw_title.unwrap_or_default(), heuristic_text),
        remote: location_is_remote(&location) || LIVE_POSTINGS_REMOTE,
        company_logo: company_logo_url(raw_company),
        tags: derive_tags(raw_title.unwrap_or_default(), heuristic_text, raw_industry),
        apply_url: apply_url(&raw),
        company_size: random_company_size(rng),
        industry: raw_industry
            .map(str::to_string)
            .unwrap_or_else(|| random_industry(rng)),
        location,
    }
}

/// Transforms a batch, keeping the first posting for any repeated id.
pub fn transform_batch<R: Rng + ?Sized>(
    records: &[Value],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(records.len());

    for record in records {
        let job = transform_job(record, now, rng);
        if seen.insert(job.id.clone()) {
            jobs.push(job);
        } else {
            debug!("Dropping duplicate upstream job id: {}", job.id);
        }
    }

    jobs
}

/// One company per distinct name, in first-seen order.
pub fn aggregate_companies<R: Rng + ?Sized>(jobs: &[JobPosting], rng: &mut R) -> Vec<Company> {
    let mut companies: Vec<Company> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for job in jobs {
        match by_name.get(job.company.as_str()) {
            Some(&index) => companies[index].jobs_count += 1,
            None => {
                by_name.insert(job.company.as_str(), companies.len());
                companies.push(company_from_job(job, rng));
            }
        }
    }

    companies
}

fn company_from_job<R: Rng + ?Sized>(job: &JobPosting, rng: &mut R) -> Company {
    let location = if job.location == "Remote" {
        "Global".to_string()
    } else {
        job.location.clone()
    };

    Company {
        id: uuid::Uuid::new_v4().simple().to_string(),
        name: job.company.clone(),
        logo: job.company_logo.clone(),
        industry: job.industry.clone(),
        size: job.company_size.clone(),
        location,
        description: company_description(&job.company, &job.industry, rng),
        website: company_website(&job.company),
        founded_year: rng.gen_range(2000..=2024),
        employees: job.company_size.clone(),
        jobs_count: 1,
        rating: random_rating(rng),
        benefits: default_benefits(),
        culture_tags: random_culture_tags(rng),
        tech_stack: random_tech_stack(rng),
    }
}

fn salary_text(raw: &RawJob<'_>) -> String {
    match (raw.number("annualSalaryMin"), raw.number("annualSalaryMax")) {
        (Some(min), Some(max)) => format!(
            "{} - {}",
            format_salary_amount(min),
            format_salary_amount(max)
        ),
        _ => raw
            .scalar_text("salary")
            .unwrap_or_else(|| DEFAULT_SALARY.to_string()),
    }
}

fn apply_url(raw: &RawJob<'_>) -> String {
    if let Some(slug) = raw.text("jobSlug") {
        format!("{}/{}", JOB_PAGE_BASE, slug)
    } else if let Some(url) = raw.text("url") {
        url.to_string()
    } else {
        "#".to_string()
    }
}

/// Accepts RFC 3339 and Jobicy's `YYYY-MM-DD HH:MM:SS` (read as UTC).
pub fn parse_posted_date(value: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(value) = value.map(str::trim) else {
        return now;
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.with_timezone(&Utc);
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .unwrap_or(now)
}

pub fn location_is_remote(location: &str) -> bool {
    let location = location.to_lowercase();
    location.contains("remote") || location.contains("anywhere")
}

pub fn random_company_size<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(COMPANY_SIZES, rng)
}

pub fn random_industry<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(INDUSTRIES, rng)
}

/// 3.0 to 5.0, one decimal.
pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.gen_range(3.0..=5.0_f64) * 10.0).round() / 10.0
}

pub fn random_culture_tags<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(2..=4);
    CULTURE_TAGS[..count].iter().map(|t| t.to_string()).collect()
}

pub fn random_tech_stack<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    TECH_STACK
        .iter()
        .filter(|_| rng.gen_bool(0.4))
        .take(MAX_TECH_STACK)
        .map(|t| t.to_string())
        .collect()
}

fn company_description<R: Rng + ?Sized>(name: &str, industry: &str, rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!(
            "{} is a leading {} company focused on innovation and growth.",
            name, industry
        ),
        1 => format!("Join {}, where we're building the future of {}.", name, industry),
        _ => format!(
            "{} is transforming {} through cutting-edge technology.",
            name, industry
        ),
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}
