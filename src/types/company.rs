// src/types/company.rs
use serde::{Deserialize, Serialize};

/// Company derived from the current job batch. Everything except `name`,
/// `logo`, `industry`, `location` and `jobs_count` is presentation filler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub industry: String,
    pub size: String,
    pub location: String,
    pub description: String,
    pub website: String,
    pub founded_year: i32,
    pub employees: String,
    pub jobs_count: u32,
    pub rating: f64,
    pub benefits: Vec<String>,
    pub culture_tags: Vec<String>,
    pub tech_stack: Vec<String>,
}
