use std::env;
use std::fmt;

use crate::search::{MatchWeights, RankingConfig, DEFAULT_WEIGHTS, RESULT_LIMIT};

/// Environment-backed configuration for embedding services.
///
/// The engine itself never reads the environment; callers load this once at
/// startup and inject the resulting policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub ranking: RankingConfig,
}

impl SearchConfig {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables: `TALENT_RESULT_LIMIT`, `TALENT_SKILL_WEIGHT`,
    /// `TALENT_EXPERIENCE_WEIGHT`, `TALENT_LOCATION_WEIGHT`. Unset variables
    /// fall back to the documented defaults; set-but-invalid values are
    /// rejected. Overridden weights must still sum to 1.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let result_limit = match env::var("TALENT_RESULT_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidLimit { value: raw })?,
            Err(_) => RESULT_LIMIT,
        };

        let weights = MatchWeights {
            skills: weight_var("TALENT_SKILL_WEIGHT", DEFAULT_WEIGHTS.skills)?,
            experience: weight_var("TALENT_EXPERIENCE_WEIGHT", DEFAULT_WEIGHTS.experience)?,
            location: weight_var("TALENT_LOCATION_WEIGHT", DEFAULT_WEIGHTS.location)?,
        };
        if (weights.sum() - 1.0).abs() > 1e-6 {
            return Err(ConfigError::WeightSum { sum: weights.sum() });
        }

        Ok(Self {
            ranking: RankingConfig {
                weights,
                result_limit,
            },
        })
    }
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|weight| *weight >= 0.0)
            .ok_or(ConfigError::InvalidWeight { name, value: raw }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLimit { value: String },
    InvalidWeight { name: &'static str, value: String },
    WeightSum { sum: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLimit { value } => {
                write!(f, "TALENT_RESULT_LIMIT must be a positive integer, got '{value}'")
            }
            ConfigError::InvalidWeight { name, value } => {
                write!(f, "{name} must be a non-negative number, got '{value}'")
            }
            ConfigError::WeightSum { sum } => {
                write!(f, "matching weights must sum to 1, got {sum}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
