//! Central registry of the features fed to the scoring pipeline.
//!
//! The numeric feature order here MUST match the order used when a model
//! artifact was fitted. Changing it is a breaking change for saved artifacts.

use rust_decimal::prelude::ToPrimitive;

use crate::domain::customer::CustomerProfile;

/// Numeric feature columns, in pipeline order.
pub const NUMERIC_FEATURES: &[&str] = &[
    "age",
    "website_visits",
    "annual_income",
    "expenses",
    "credit_score",
];

/// The single categorical feature, one-hot encoded by the pipeline.
pub const CATEGORICAL_FEATURE: &str = "occupation";

/// Extract the numeric feature row from a profile, in registry order.
pub fn numeric_row(profile: &CustomerProfile) -> Vec<f64> {
    vec![
        profile.age as f64,
        profile.website_visits as f64,
        profile.annual_income.to_f64().unwrap_or(0.0),
        profile.expenses.to_f64().unwrap_or(0.0),
        profile.credit_score,
    ]
}
