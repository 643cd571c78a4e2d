use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerProfile;
use crate::domain::errors::ScoringError;

const MONTHS_PER_YEAR: i64 = 12;
const CREDIT_SCORE_FLOOR: f64 = 300.0;
const CREDIT_SCORE_RANGE: f64 = 550.0;
const ENGAGEMENT_FULL_VISITS: f64 = 20.0;
const METRIC_CEILING: f64 = 100.0;

/// Percentage views of a customer profile shown alongside the score.
///
/// Each metric is capped at 100 from above only. Negative inputs pass
/// through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    /// Annualized expenses as a percentage of annual income.
    pub expense_ratio: f64,
    /// Position of the credit score within the 300..850 band, as a percentage.
    pub credit_health: f64,
    /// Website visits relative to a 20-visit ceiling, as a percentage.
    pub engagement_score: f64,
}

impl CustomerMetrics {
    pub fn calculate(profile: &CustomerProfile) -> Result<Self, ScoringError> {
        let annual_expenses = profile
            .expenses
            .checked_mul(Decimal::from(MONTHS_PER_YEAR))
            .ok_or_else(|| ScoringError::MetricComputation {
                metric: "expense_ratio",
                reason: "expense annualization overflowed".to_string(),
            })?;
        let expense_fraction = annual_expenses
            .checked_div(profile.annual_income)
            .ok_or_else(|| ScoringError::MetricComputation {
                metric: "expense_ratio",
                reason: "division by annual_income failed".to_string(),
            })?;
        let expense_ratio =
            (expense_fraction.to_f64().unwrap_or(0.0) * 100.0).min(METRIC_CEILING);

        let credit_health = ((profile.credit_score - CREDIT_SCORE_FLOOR) / CREDIT_SCORE_RANGE
            * 100.0)
            .min(METRIC_CEILING);

        let engagement_score = (profile.website_visits as f64 / ENGAGEMENT_FULL_VISITS * 100.0)
            .min(METRIC_CEILING);

        Ok(Self {
            expense_ratio,
            credit_health,
            engagement_score,
        })
    }

    /// Neutral metrics reported when scoring fails entirely.
    pub fn service_default() -> Self {
        Self {
            expense_ratio: 50.0,
            credit_health: 50.0,
            engagement_score: 50.0,
        }
    }
}
