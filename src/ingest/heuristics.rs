// src/ingest/heuristics.rs
//! Keyword heuristics that infer structured fields from free text.

use crate::types::{EmploymentType, ExperienceLevel};
use reqwest::Url;

const MAX_TAGS: usize = 5;
const LOGO_BASE_URL: &str = "https://ui-avatars.com/api/";
const LOGO_PLACEHOLDER: &str = "TC";

/// Keyword reported on match, followed by the lowercase needles that match it.
const SKILL_PATTERNS: &[(&str, &[&str])] = &[
    ("react", &["react"]),
    ("javascript", &["javascript"]),
    ("typescript", &["typescript"]),
    ("node.js", &["node.js", "nodejs"]),
    ("python", &["python"]),
    ("java", &["java"]),
    ("aws", &["aws"]),
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes"]),
    ("sql", &["sql"]),
];

const BENEFIT_PATTERNS: &[&str] = &[
    "health insurance",
    "dental",
    "401k",
    "remote",
    "flexible",
    "vacation",
    "pto",
    "equity",
];

const TECH_TAGS: &[&str] = &["React", "JavaScript", "Python", "Node.js", "AWS", "Docker"];

pub const DEFAULT_REQUIREMENTS: [&str; 4] = [
    "Bachelor's degree in Computer Science or related field",
    "3+ years of software development experience",
    "Strong problem-solving skills",
    "Experience with modern web technologies",
];

pub const DEFAULT_BENEFITS: [&str; 5] = [
    "Health, dental, and vision insurance",
    "Flexible working hours",
    "Remote work options",
    "Professional development budget",
    "401(k) with company match",
];

pub fn default_requirements() -> Vec<String> {
    DEFAULT_REQUIREMENTS.iter().map(|s| s.to_string()).collect()
}

pub fn default_benefits() -> Vec<String> {
    DEFAULT_BENEFITS.iter().map(|s| s.to_string()).collect()
}

/// Maps the upstream job type label. Anything unrecognised is full time.
pub fn map_employment_type(job_type: Option<&str>) -> EmploymentType {
    match job_type.map(|t| t.trim().to_lowercase()).as_deref() {
        Some("full-time") => EmploymentType::FullTime,
        Some("part-time") => EmploymentType::PartTime,
        Some("contract") => EmploymentType::Contract,
        Some("internship") => EmploymentType::Internship,
        _ => EmploymentType::FullTime,
    }
}

pub fn extract_requirements(description: Option<&str>) -> Vec<String> {
    let text = match description {
        Some(d) if !d.is_empty() => d.to_lowercase(),
        _ => return default_requirements(),
    };

    let found: Vec<String> = SKILL_PATTERNS
        .iter()
        .filter(|(_, needles)| needles.iter().any(|n| text.contains(n)))
        .map(|(keyword, _)| keyword.to_string())
        .collect();

    if found.is_empty() {
        default_requirements()
    } else {
        found
    }
}

pub fn extract_benefits(description: Option<&str>) -> Vec<String> {
    let text = description.unwrap_or_default().to_lowercase();

    let found: Vec<String> = BENEFIT_PATTERNS
        .iter()
        .filter(|pattern| text.contains(*pattern))
        .map(|pattern| pattern.to_string())
        .collect();

    if found.is_empty() {
        default_benefits()
    } else {
        found
    }
}

/// Senior terms win over junior terms when both appear.
pub fn infer_experience_level(title: &str, description: &str) -> ExperienceLevel {
    let text = format!("{} {}", title, description).to_lowercase();

    if ["senior", "lead", "principal"].iter().any(|t| text.contains(t)) {
        ExperienceLevel::Senior
    } else if ["junior", "entry"].iter().any(|t| text.contains(t)) {
        ExperienceLevel::Junior
    } else {
        ExperienceLevel::Mid
    }
}

/// Tech tags first, then "Remote", then the raw industry; at most five.
pub fn derive_tags(title: &str, description: &str, industry: Option<&str>) -> Vec<String> {
    let text = format!("{} {}", title, description).to_lowercase();

    let mut tags: Vec<String> = TECH_TAGS
        .iter()
        .filter(|tag| text.contains(&tag.to_lowercase()))
        .map(|tag| tag.to_string())
        .collect();

    if text.contains("remote") {
        tags.push("Remote".to_string());
    }
    if let Some(industry) = industry.filter(|i| !i.is_empty()) {
        tags.push(industry.to_string());
    }

    tags.truncate(MAX_TAGS);
    tags
}

/// Avatar URL keyed by the first two characters of the company name.
pub fn company_logo_url(company_name: Option<&str>) -> String {
    let abbreviation: String = match company_name.filter(|n| !n.is_empty()) {
        Some(name) => name.chars().take(2).collect(),
        None => LOGO_PLACEHOLDER.to_string(),
    };

    let params = [
        ("name", abbreviation.as_str()),
        ("size", "100"),
        ("background", "374151"),
        ("color", "ffffff"),
    ];

    // Form encoding writes spaces as '+'; a literal '+' is already '%2B'.
    match Url::parse_with_params(LOGO_BASE_URL, &params) {
        Ok(url) => url.as_str().replace('+', "%20"),
        Err(_) => format!(
            "{}?name={}&size=100&background=374151&color=ffffff",
            LOGO_BASE_URL, LOGO_PLACEHOLDER
        ),
    }
}

/// `https://{lowercase alphanumerics of name}.com`
pub fn company_website(name: &str) -> String {
    let clean: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if clean.is_empty() {
        "https://company.com".to_string()
    } else {
        format!("https://{}.com", clean)
    }
}

/// Formats a salary bound the way the job board displays it: `$120,000`.
pub fn format_salary_amount(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}
