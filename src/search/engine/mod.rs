//! Deterministic scoring and ranking over an in-memory candidate pool.
//!
//! The pipeline runs three sequential stages: drop records without an
//! identity, score the survivors against the job specification, then dedupe
//! by email, stable-sort descending by score, assign dense ranks, and bound
//! the result set. No stage touches the network, disk, or any shared state.

mod config;
mod score;
mod weights;

pub use config::RankingConfig;
pub use score::MatchBreakdown;
pub use weights::{MatchWeights, DEFAULT_WEIGHTS, RESULT_LIMIT};

use std::collections::HashSet;

use tracing::debug;

use super::domain::{CandidateRecord, JobSpec, RankedCandidate};

/// Stateless matcher applying a ranking policy to a candidate pool.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: RankingConfig,
}

impl MatchEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Score, deduplicate, and rank a candidate pool against a job.
    ///
    /// Records missing `email` or `name` never reach scoring. Duplicate
    /// emails keep the first occurrence in pool order. Ties in the composite
    /// percentage preserve pool order (stable sort), ranks are dense and
    /// 1-based, and the output is truncated to the configured limit.
    pub fn rank(&self, job: &JobSpec, candidates: &[CandidateRecord]) -> Vec<RankedCandidate> {
        let mut scored: Vec<(&CandidateRecord, f64)> = candidates
            .iter()
            .filter(|candidate| candidate.has_identity())
            .map(|candidate| {
                let breakdown = MatchBreakdown::evaluate(job, candidate);
                (candidate, breakdown.percentage(&self.config.weights))
            })
            .collect();
        let survivors = scored.len();

        // Dedup runs after scoring; the kept instance already carries its
        // score and the key is solely the email, never the score.
        let mut seen = HashSet::new();
        scored.retain(|(candidate, _)| {
            let email = candidate.email.as_deref().unwrap_or_default();
            seen.insert(email.to_string())
        });
        let unique = scored.len();

        scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));

        let ranked: Vec<RankedCandidate> = scored
            .into_iter()
            .take(self.config.result_limit)
            .enumerate()
            .map(|(index, (candidate, percentage))| {
                RankedCandidate::from_record(candidate.clone(), percentage, index + 1)
            })
            .collect();

        debug!(
            pool = candidates.len(),
            survivors,
            unique,
            returned = ranked.len(),
            "ranked candidate pool"
        );

        ranked
    }
}

/// Rank a candidate pool with the default policy.
pub fn rank_candidates(job: &JobSpec, candidates: &[CandidateRecord]) -> Vec<RankedCandidate> {
    MatchEngine::default().rank(job, candidates)
}
