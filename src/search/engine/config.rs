use super::weights::{MatchWeights, RESULT_LIMIT};

/// Injectable ranking policy: factor weights and the result-set bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub weights: MatchWeights,
    pub result_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            result_limit: RESULT_LIMIT,
        }
    }
}
