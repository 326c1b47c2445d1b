// src/ingest/mock_data.rs
//! Fixed listings served whenever the live upstream path fails.

use super::heuristics::company_logo_url;
use super::transform::aggregate_companies;
use crate::types::{Company, EmploymentType, ExperienceLevel, JobPosting};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn logo(abbreviation: &str) -> String {
    company_logo_url(Some(abbreviation))
}

/// Mock postings, dated relative to `now`.
pub fn mock_jobs(now: DateTime<Utc>) -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "job1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            company: "TechFlow Solutions".to_string(),
            location: "San Francisco, CA (Remote)".to_string(),
            job_type: "Full-time".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: "$120,000 - $180,000".to_string(),
            description: "Join our team to build cutting-edge web applications using React and modern JavaScript technologies.".to_string(),
            requirements: strings(&["React", "TypeScript", "Node.js", "5+ years experience"]),
            benefits: strings(&["Health insurance", "Remote work", "Stock options", "Flexible PTO"]),
            posted_date: now - Duration::days(2),
            experience_level: ExperienceLevel::Senior,
            remote: true,
            company_logo: logo("TF"),
            tags: strings(&["React", "TypeScript", "Remote", "Frontend"]),
            apply_url: "#".to_string(),
            company_size: "51-200".to_string(),
            industry: "Technology".to_string(),
        },
        JobPosting {
            id: "job2".to_string(),
            title: "Product Manager".to_string(),
            company: "InnovateX Corp".to_string(),
            location: "New York, NY".to_string(),
            job_type: "Full-time".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: "$100,000 - $140,000".to_string(),
            description: "Lead product strategy and development for our B2B SaaS platform.".to_string(),
            requirements: strings(&[
                "Product management experience",
                "Agile methodology",
                "Data analysis",
                "Leadership skills",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Dental coverage",
                "401k matching",
                "Career development",
            ]),
            posted_date: now - Duration::days(3),
            experience_level: ExperienceLevel::Mid,
            remote: false,
            company_logo: logo("IX"),
            tags: strings(&["Product", "Strategy", "B2B", "SaaS"]),
            apply_url: "#".to_string(),
            company_size: "201-500".to_string(),
            industry: "Technology".to_string(),
        },
        JobPosting {
            id: "job3".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "CloudTech Systems".to_string(),
            location: "Austin, TX (Hybrid)".to_string(),
            job_type: "Full-time".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: "$110,000 - $150,000".to_string(),
            description: "Build and maintain our cloud infrastructure using AWS and Kubernetes.".to_string(),
            requirements: strings(&[
                "AWS experience",
                "Docker",
                "Kubernetes",
                "CI/CD pipelines",
                "Linux administration",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Remote work options",
                "Learning budget",
                "Conference attendance",
            ]),
            posted_date: now - Duration::days(1),
            experience_level: ExperienceLevel::Mid,
            remote: true,
            company_logo: logo("CT"),
            tags: strings(&["DevOps", "AWS", "Kubernetes", "Cloud"]),
            apply_url: "#".to_string(),
            company_size: "51-200".to_string(),
            industry: "Technology".to_string(),
        },
    ]
}

pub fn mock_companies() -> Vec<Company> {
    vec![
        Company {
            id: "comp1".to_string(),
            name: "TechFlow Solutions".to_string(),
            logo: logo("TF"),
            industry: "Technology".to_string(),
            size: "51-200".to_string(),
            location: "San Francisco, CA".to_string(),
            description: "TechFlow Solutions is a leading technology company focused on innovation and growth.".to_string(),
            website: "https://techflow.com".to_string(),
            founded_year: 2018,
            employees: "51-200".to_string(),
            jobs_count: 12,
            rating: 4.5,
            benefits: strings(&["Health insurance", "Remote work", "Stock options", "Flexible PTO"]),
            culture_tags: strings(&["Innovation", "Remote-first", "Diversity"]),
            tech_stack: strings(&["React", "Node.js", "AWS", "Python"]),
        },
        Company {
            id: "comp2".to_string(),
            name: "InnovateX Corp".to_string(),
            logo: logo("IX"),
            industry: "SaaS".to_string(),
            size: "201-500".to_string(),
            location: "New York, NY".to_string(),
            description: "InnovateX Corp is transforming business operations through cutting-edge SaaS solutions.".to_string(),
            website: "https://innovatex.com".to_string(),
            founded_year: 2015,
            employees: "201-500".to_string(),
            jobs_count: 23,
            rating: 4.2,
            benefits: strings(&[
                "Health insurance",
                "Dental coverage",
                "401k matching",
                "Career development",
            ]),
            culture_tags: strings(&["Growth", "Collaboration", "Innovation"]),
            tech_stack: strings(&["TypeScript", "React", "Docker", "PostgreSQL"]),
        },
        Company {
            id: "comp3".to_string(),
            name: "CloudTech Systems".to_string(),
            logo: logo("CT"),
            industry: "Cloud Infrastructure".to_string(),
            size: "51-200".to_string(),
            location: "Austin, TX".to_string(),
            description: "CloudTech Systems runs managed Kubernetes platforms for mid-size engineering teams.".to_string(),
            website: "https://cloudtech.com".to_string(),
            founded_year: 2019,
            employees: "51-200".to_string(),
            jobs_count: 7,
            rating: 4.4,
            benefits: strings(&[
                "Health insurance",
                "Remote work options",
                "Learning budget",
                "Conference attendance",
            ]),
            culture_tags: strings(&["Remote-first", "Growth"]),
            tech_stack: strings(&["AWS", "Kubernetes", "Docker", "Go"]),
        },
    ]
}

/// Companies for a fallback batch. Names with a fixed profile above keep it,
/// others are derived like live companies; `jobs_count` always reflects `jobs`.
pub fn fallback_companies<R: Rng + ?Sized>(jobs: &[JobPosting], rng: &mut R) -> Vec<Company> {
    let profiles = mock_companies();

    aggregate_companies(jobs, rng)
        .into_iter()
        .map(|derived| match profiles.iter().find(|p| p.name == derived.name) {
            Some(profile) => Company {
                jobs_count: derived.jobs_count,
                ..profile.clone()
            },
            None => derived,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_jobs_have_unique_ids_and_full_fields() {
        let jobs = mock_jobs(Utc::now());
        assert!(jobs.len() >= 3);

        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());

        for job in &jobs {
            assert!(!job.title.is_empty());
            assert!(!job.requirements.is_empty());
            assert!(!job.benefits.is_empty());
            assert!(job.tags.len() <= 5);
        }
    }

    #[test]
    fn test_mock_jobs_are_dated_in_the_past() {
        let now = Utc::now();
        assert!(mock_jobs(now).iter().all(|j| j.posted_date < now));
    }

    #[test]
    fn test_mock_companies() {
        let companies = mock_companies();
        assert!(companies.len() >= 2);
        assert_eq!(companies[0].name, "TechFlow Solutions");
        assert!(companies.iter().all(|c| (3.0..=5.0).contains(&c.rating)));
    }

    #[test]
    fn test_fallback_companies_count_the_batch() {
        let mut jobs = mock_jobs(Utc::now());
        let extra = JobPosting {
            id: "job4".to_string(),
            title: "Site Reliability Engineer".to_string(),
            ..jobs[2].clone()
        };
        jobs.push(extra);
        jobs[1].company = "Unlisted Labs".to_string();

        let companies = fallback_companies(&jobs, &mut rand::thread_rng());

        let summary: Vec<_> = companies
            .iter()
            .map(|c| (c.name.as_str(), c.jobs_count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("TechFlow Solutions", 1),
                ("Unlisted Labs", 1),
                ("CloudTech Systems", 2)
            ]
        );
        assert_eq!(companies[0].id, "comp1");
        assert_eq!(companies[2].website, "https://cloudtech.com");
        assert_eq!(companies[1].website, "https://unlistedlabs.com");
    }
}
