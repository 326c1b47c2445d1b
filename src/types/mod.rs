// src/types/mod.rs
pub mod company;
pub mod filters;
pub mod job;
pub mod raw;

pub use company::Company;
pub use filters::{JobFilters, DEFAULT_RESULT_LIMIT};
pub use job::{EmploymentType, ExperienceLevel, JobPosting};
pub use raw::{RawJob, UpstreamResponse};
