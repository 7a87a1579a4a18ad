use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder used for absent display text in ranked output.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder used for an absent candidate name in ranked output.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Structured hiring requirement used as the scoring reference for one search.
///
/// Every field is optional on the wire; an absent field degrades the matching
/// sub-score it feeds to its zero contribution. `skills` is treated as a set
/// of exact tokens — normalization (case, whitespace) is the caller's
/// responsibility and the engine performs none of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    #[serde(default)]
    pub title: Option<String>,
    /// Free-text description; carried for upstream summarization, not scored.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Experience requirement, e.g. "5 years"; matched by substring containment.
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One applicant profile from the candidate pool.
///
/// `email` and `name` are required for a record to survive filtering but are
/// optional here so malformed pool entries deserialize instead of aborting the
/// whole request. The remaining fields are either scoring inputs (`skills`,
/// `experience`, `country`, `work_experience`) or display passthrough carried
/// unchanged into the ranked output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Opaque upstream identity, e.g. a database key.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(rename = "jobTitle", default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub technical_expertise_in_skills: Vec<String>,
    #[serde(rename = "Experience_level", default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "Education", default)]
    pub education: Vec<Value>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperienceEntry>,
}

impl CandidateRecord {
    /// Whether the record carries the identity fields required for ranking.
    pub fn has_identity(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.email) && filled(&self.name)
    }
}

/// One position from a candidate's work history.
///
/// Only `location` participates in scoring; everything else is kept as raw
/// detail so the entry round-trips through the output unchanged. A `location`
/// that is absent or not a string counts as empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl WorkExperienceEntry {
    /// Location as text for substring matching.
    pub fn location_text(&self) -> &str {
        self.location.as_ref().and_then(Value::as_str).unwrap_or("")
    }
}

/// One candidate in the ranked result set.
///
/// Display fields absent on the source record are defaulted here, once, at
/// construction; consumers never see missing keys. `matching_percentage` is
/// the weighted composite score in [0, 100] and `rank` the dense 1-based
/// position in the sorted output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "_id")]
    pub id: Value,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub state: String,
    pub resume: String,
    pub experience: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub linkedin_url: String,
    pub technical_expertise_in_skills: Vec<String>,
    #[serde(rename = "Experience_level")]
    pub experience_level: String,
    pub skills: Vec<String>,
    #[serde(rename = "Education")]
    pub education: Vec<Value>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub matching_percentage: f64,
    pub rank: usize,
}

impl RankedCandidate {
    /// Build the output view of a scored record, applying display defaults.
    pub fn from_record(record: CandidateRecord, matching_percentage: f64, rank: usize) -> Self {
        let text = |field: Option<String>| field.unwrap_or_else(|| NOT_PROVIDED.to_string());

        Self {
            id: record.id.unwrap_or_else(|| Value::Object(Map::new())),
            // Filtering guarantees name and email are present; the defaults
            // here only cover records constructed outside the pipeline.
            name: record.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            email: text(record.email),
            phone_number: text(record.phone_number),
            country: text(record.country),
            state: text(record.state),
            resume: text(record.resume),
            experience: text(record.experience),
            job_title: text(record.job_title),
            linkedin_url: text(record.linkedin_url),
            technical_expertise_in_skills: record.technical_expertise_in_skills,
            experience_level: text(record.experience_level),
            skills: record.skills,
            education: record.education,
            work_experience: record.work_experience,
            matching_percentage,
            rank,
        }
    }
}
