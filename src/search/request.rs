use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{CandidateRecord, JobSpec};

/// Wire shape of one search: job fields at the top level plus a `users` pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub job: JobSpec,
    #[serde(default)]
    pub users: Vec<CandidateRecord>,
}

impl SearchRequest {
    /// Parse a raw payload, failing fast on structural problems.
    ///
    /// A missing `users` key is an empty pool; a `users` value that is not a
    /// sequence of candidate objects, or a payload that is not an object at
    /// all, is rejected rather than partially scored.
    pub fn from_value(payload: Value) -> Result<Self, InvalidInputError> {
        let Value::Object(mut fields) = payload else {
            return Err(InvalidInputError::PayloadNotAnObject);
        };

        let users = fields
            .remove("users")
            .unwrap_or_else(|| Value::Array(Vec::new()));
        let users: Vec<CandidateRecord> = serde_json::from_value(users)
            .map_err(|source| InvalidInputError::MalformedCandidates { source })?;

        let job: JobSpec = serde_json::from_value(Value::Object(fields))
            .map_err(|source| InvalidInputError::MalformedJob { source })?;

        Ok(Self { job, users })
    }
}

/// Structural problems in a search payload.
///
/// Missing optional fields are never an error; they degrade to zero
/// sub-scores or display defaults. This type covers only input the engine
/// cannot score without guessing.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInputError {
    #[error("search payload must be a JSON object")]
    PayloadNotAnObject,
    #[error("job specification is malformed: {source}")]
    MalformedJob { source: serde_json::Error },
    #[error("`users` must be a sequence of candidate records: {source}")]
    MalformedCandidates { source: serde_json::Error },
}
