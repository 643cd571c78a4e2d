use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::customer::CustomerProfile;

const BASE_PROBABILITY: f64 = 0.5;
const RULE_ADJUSTMENT: f64 = 0.1;
const CREDIT_SCORE_THRESHOLD: f64 = 700.0;
const ANNUAL_INCOME_THRESHOLD: Decimal = dec!(50000);
const WEBSITE_VISITS_THRESHOLD: i64 = 10;

/// Rule based probability used when the model cannot produce a prediction.
///
/// Starts from a neutral 0.5 and adds 0.1 for each favorable signal, capped
/// at 1.0. All comparisons are strict, so a profile sitting exactly on every
/// threshold stays at the base probability.
pub fn rule_based_probability(profile: &CustomerProfile) -> f64 {
    let mut probability = BASE_PROBABILITY;
    if profile.credit_score > CREDIT_SCORE_THRESHOLD {
        probability += RULE_ADJUSTMENT;
    }
    if profile.annual_income > ANNUAL_INCOME_THRESHOLD {
        probability += RULE_ADJUSTMENT;
    }
    if profile.website_visits > WEBSITE_VISITS_THRESHOLD {
        probability += RULE_ADJUSTMENT;
    }
    probability.min(1.0)
}
