use std::collections::HashSet;

use super::weights::MatchWeights;
use crate::search::domain::{CandidateRecord, JobSpec};

/// Per-factor sub-scores for one candidate, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
}

impl MatchBreakdown {
    pub fn evaluate(job: &JobSpec, candidate: &CandidateRecord) -> Self {
        Self {
            skills: skill_score(&job.skills, &candidate.skills),
            experience: experience_score(job.experience.as_deref(), candidate.experience.as_deref()),
            location: location_score(job.location.as_deref(), candidate),
        }
    }

    /// Weighted composite scaled to a percentage in [0, 100].
    pub fn percentage(&self, weights: &MatchWeights) -> f64 {
        (self.skills * weights.skills
            + self.experience * weights.experience
            + self.location * weights.location)
            * 100.0
    }
}

/// Fraction of required skill tokens the candidate possesses.
///
/// Tokens are compared by exact string equality; both sides are treated as
/// sets, so duplicates never inflate the score. An empty requirement scores 0
/// rather than dividing by zero.
fn skill_score(job_skills: &[String], candidate_skills: &[String]) -> f64 {
    let required: HashSet<&str> = job_skills.iter().map(String::as_str).collect();
    if required.is_empty() {
        return 0.0;
    }

    let possessed: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();
    let matched = required.intersection(&possessed).count();
    matched as f64 / required.len() as f64
}

/// 1 when the lower-cased requirement appears inside the lower-cased candidate
/// experience text, else 0.
///
/// Known limitation: containment is a crude heuristic (a requirement of "5"
/// matches "15 years"). Changing it would reorder existing rankings, so it
/// stays as documented policy.
fn experience_score(requirement: Option<&str>, experience: Option<&str>) -> f64 {
    match (requirement, experience) {
        (Some(requirement), Some(experience))
            if !requirement.is_empty() && !experience.is_empty() =>
        {
            if experience
                .to_lowercase()
                .contains(&requirement.to_lowercase())
            {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Location affinity: 1 on a country hit, 0.5 on a work-history hit, else 0.
///
/// The country match strictly dominates — it is checked first and
/// short-circuits the work-history scan. All comparisons are lower-cased
/// substring containment of the job location.
fn location_score(job_location: Option<&str>, candidate: &CandidateRecord) -> f64 {
    let Some(job_location) = job_location.filter(|l| !l.is_empty()) else {
        return 0.0;
    };
    let needle = job_location.to_lowercase();

    let country = candidate
        .country
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if !country.is_empty() && country.contains(&needle) {
        return 1.0;
    }

    let worked_near = candidate
        .work_experience
        .iter()
        .any(|entry| entry.location_text().to_lowercase().contains(&needle));
    if worked_near {
        0.5
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::domain::WorkExperienceEntry;
    use serde_json::json;

    fn candidate_with_locations(country: Option<&str>, worked: &[&str]) -> CandidateRecord {
        CandidateRecord {
            country: country.map(str::to_string),
            work_experience: worked
                .iter()
                .map(|location| WorkExperienceEntry {
                    location: Some(json!(location)),
                    ..WorkExperienceEntry::default()
                })
                .collect(),
            ..CandidateRecord::default()
        }
    }

    #[test]
    fn skill_score_is_fraction_of_required_set() {
        let required = vec!["python".to_string(), "sql".to_string()];
        let possessed = vec!["python".to_string(), "docker".to_string()];
        assert_eq!(skill_score(&required, &possessed), 0.5);
    }

    #[test]
    fn skill_score_ignores_duplicate_tokens() {
        let required = vec!["python".to_string(), "python".to_string()];
        let possessed = vec!["python".to_string()];
        assert_eq!(skill_score(&required, &possessed), 1.0);
    }

    #[test]
    fn empty_requirement_scores_zero_without_dividing() {
        let possessed = vec!["python".to_string()];
        assert_eq!(skill_score(&[], &possessed), 0.0);
    }

    #[test]
    fn skill_comparison_is_exact_no_case_folding() {
        let required = vec!["Python".to_string()];
        let possessed = vec!["python".to_string()];
        assert_eq!(skill_score(&required, &possessed), 0.0);
    }

    #[test]
    fn experience_matches_by_case_insensitive_containment() {
        assert_eq!(experience_score(Some("5 Years"), Some("over 5 years")), 1.0);
        assert_eq!(experience_score(Some("7 years"), Some("5 years")), 0.0);
    }

    #[test]
    fn experience_containment_quirk_matches_inside_larger_numbers() {
        // "15 years" contains "5"; the heuristic accepts it on purpose.
        assert_eq!(experience_score(Some("5"), Some("15 years")), 1.0);
    }

    #[test]
    fn missing_or_empty_experience_scores_zero() {
        assert_eq!(experience_score(None, Some("5 years")), 0.0);
        assert_eq!(experience_score(Some("5 years"), None), 0.0);
        assert_eq!(experience_score(Some(""), Some("5 years")), 0.0);
        assert_eq!(experience_score(Some("5 years"), Some("")), 0.0);
    }

    #[test]
    fn country_hit_scores_full_and_dominates_work_history() {
        let candidate = candidate_with_locations(Some("India"), &["London"]);
        assert_eq!(location_score(Some("india"), &candidate), 1.0);
    }

    #[test]
    fn work_history_hit_scores_half() {
        let candidate = candidate_with_locations(Some("Canada"), &["Bangalore, India"]);
        assert_eq!(location_score(Some("india"), &candidate), 0.5);
    }

    #[test]
    fn no_location_data_scores_zero() {
        let candidate = candidate_with_locations(None, &[]);
        assert_eq!(location_score(Some("remote"), &candidate), 0.0);
    }

    #[test]
    fn empty_job_location_scores_zero() {
        let candidate = candidate_with_locations(Some("India"), &[]);
        assert_eq!(location_score(None, &candidate), 0.0);
        assert_eq!(location_score(Some(""), &candidate), 0.0);
    }

    #[test]
    fn non_string_work_location_counts_as_empty() {
        let candidate = CandidateRecord {
            work_experience: vec![WorkExperienceEntry {
                location: Some(json!(42)),
                ..WorkExperienceEntry::default()
            }],
            ..CandidateRecord::default()
        };
        assert_eq!(location_score(Some("india"), &candidate), 0.0);
    }

    #[test]
    fn percentage_applies_documented_weights() {
        let breakdown = MatchBreakdown {
            skills: 1.0,
            experience: 1.0,
            location: 0.5,
        };
        let pct = breakdown.percentage(&MatchWeights::default());
        assert!((pct - 85.0).abs() < 1e-9);
    }
}
