use serde_json::json;

use crate::search::domain::{CandidateRecord, JobSpec, WorkExperienceEntry};

pub(super) fn job() -> JobSpec {
    JobSpec {
        title: Some("Data Engineer".to_string()),
        description: Some("Build and operate batch pipelines.".to_string()),
        skills: vec!["python".to_string(), "sql".to_string()],
        experience: Some("5".to_string()),
        location: Some("india".to_string()),
    }
}

/// Fully populated candidate that scores 100% against [`job`].
pub(super) fn strong_candidate(email: &str, name: &str) -> CandidateRecord {
    CandidateRecord {
        id: Some(json!({"$oid": format!("id-{email}")})),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone_number: Some("+91 98765 43210".to_string()),
        country: Some("India".to_string()),
        state: Some("Karnataka".to_string()),
        resume: Some("https://cdn.example.com/resumes/a1.pdf".to_string()),
        experience: Some("5 years building data platforms".to_string()),
        job_title: Some("Senior Data Engineer".to_string()),
        linkedin_url: Some("https://linkedin.com/in/example".to_string()),
        technical_expertise_in_skills: vec!["airflow".to_string()],
        experience_level: Some("Senior".to_string()),
        skills: vec!["python".to_string(), "sql".to_string(), "spark".to_string()],
        education: vec![json!({"degree": "B.Tech", "year": 2016})],
        work_experience: vec![work_entry("Bangalore, India", "Acme Data")],
    }
}

/// Candidate carrying only identity plus the given skills.
pub(super) fn skill_candidate(email: &str, skills: &[&str]) -> CandidateRecord {
    CandidateRecord {
        name: Some(format!("Candidate {email}")),
        email: Some(email.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..CandidateRecord::default()
    }
}

pub(super) fn work_entry(location: &str, company: &str) -> WorkExperienceEntry {
    let mut entry = WorkExperienceEntry {
        location: Some(json!(location)),
        ..WorkExperienceEntry::default()
    };
    entry
        .details
        .insert("company".to_string(), json!(company));
    entry
}
