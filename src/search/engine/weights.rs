/// Default scoring policy: skills dominate, experience and location split the
/// remainder evenly. Fixed by design; not a per-call parameter.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.4,
    experience: 0.3,
    location: 0.3,
};

/// Upper bound on the size of a ranked result set.
pub const RESULT_LIMIT: usize = 20;

/// Relative weight of each matching factor in the composite percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
