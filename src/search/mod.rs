//! Candidate search: payload parsing, matching, and ranking.

pub mod domain;
pub mod engine;
pub mod request;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateRecord, JobSpec, RankedCandidate, WorkExperienceEntry, NOT_PROVIDED, UNKNOWN_NAME,
};
pub use engine::{
    rank_candidates, MatchBreakdown, MatchEngine, MatchWeights, RankingConfig, DEFAULT_WEIGHTS,
    RESULT_LIMIT,
};
pub use request::{InvalidInputError, SearchRequest};

use serde_json::Value;

/// Parse a raw search payload and rank its candidate pool with the default
/// policy. This is the shape the surrounding service's search endpoint feeds
/// through.
pub fn search(payload: Value) -> Result<Vec<RankedCandidate>, InvalidInputError> {
    let request = SearchRequest::from_value(payload)?;
    Ok(MatchEngine::default().rank(&request.job, &request.users))
}
