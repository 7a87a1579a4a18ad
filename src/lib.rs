//! Candidate matching and ranking core for resume search services.
//!
//! The crate takes a structured job specification plus a pool of candidate
//! profiles (produced upstream, e.g. by a resume-to-JSON extraction pipeline)
//! and returns a deduplicated, scored, ranked, size-bounded result set. The
//! engine is pure and stateless: it performs no I/O and is safe to call from
//! concurrent request handlers.

pub mod config;
pub mod error;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use error::AppError;
pub use search::{
    rank_candidates, search, CandidateRecord, InvalidInputError, JobSpec, MatchEngine,
    MatchWeights, RankedCandidate, RankingConfig, SearchRequest, WorkExperienceEntry,
};
