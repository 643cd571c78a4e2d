use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerProfile;
use crate::domain::metrics::CustomerMetrics;

const PROBABILITY_DECIMALS: f64 = 10_000.0;

/// Where the reported probability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Produced by the fitted pipeline.
    Model,
    /// Produced by the rule based fallback after a model failure.
    RuleFallback,
    /// Service default returned when scoring failed entirely.
    Default,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSource::Model => write!(f, "MODEL"),
            ScoreSource::RuleFallback => write!(f, "RULE_FALLBACK"),
            ScoreSource::Default => write!(f, "DEFAULT"),
        }
    }
}

/// Complete scoring outcome: the coerced profile that was scored, the
/// probability, its 0..100 display form and the profile metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub profile: CustomerProfile,
    pub probability: f64,
    pub propensity_score: u8,
    pub source: ScoreSource,
    pub metrics: CustomerMetrics,
}

impl ScoreResult {
    pub fn new(
        profile: CustomerProfile,
        probability: f64,
        source: ScoreSource,
        metrics: CustomerMetrics,
    ) -> Self {
        let probability = round_probability(probability);
        Self {
            profile,
            probability,
            propensity_score: display_score(probability),
            source,
            metrics,
        }
    }

    /// Fixed result reported when scoring fails entirely: a neutral 50%
    /// score over a default profile with neutral metrics.
    pub fn service_default() -> Self {
        Self {
            profile: CustomerProfile::default(),
            probability: 0.5,
            propensity_score: 50,
            source: ScoreSource::Default,
            metrics: CustomerMetrics::service_default(),
        }
    }
}

/// Round a probability to four decimal places.
pub fn round_probability(probability: f64) -> f64 {
    (probability * PROBABILITY_DECIMALS).round() / PROBABILITY_DECIMALS
}

/// Convert a probability to its whole-number percentage display form.
pub fn display_score(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
