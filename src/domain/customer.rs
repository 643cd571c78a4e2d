use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

pub const DEFAULT_AGE: i64 = 30;
pub const DEFAULT_OCCUPATION: &str = "Professional";
pub const DEFAULT_WEBSITE_VISITS: i64 = 5;
pub const DEFAULT_ANNUAL_INCOME: Decimal = dec!(50000);
pub const DEFAULT_EXPENSES: Decimal = dec!(2000);
pub const DEFAULT_CREDIT_SCORE: f64 = 700.0;

/// Raw scoring request as received from the outside world. Every field is an
/// optional string so partial submissions can be coerced with per-field
/// defaults before scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub website_visits: Option<String>,
    pub annual_income: Option<String>,
    pub expenses: Option<String>,
    pub credit_score: Option<String>,
}

/// Fully coerced customer profile used for prediction and metric computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub age: i64,
    pub occupation: String,
    pub website_visits: i64,
    pub annual_income: Decimal,
    pub expenses: Decimal,
    pub credit_score: f64,
}

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            occupation: DEFAULT_OCCUPATION.to_string(),
            website_visits: DEFAULT_WEBSITE_VISITS,
            annual_income: DEFAULT_ANNUAL_INCOME,
            expenses: DEFAULT_EXPENSES,
            credit_score: DEFAULT_CREDIT_SCORE,
        }
    }
}

impl CustomerProfile {
    /// Coerce a raw request into a profile. Absent fields take their
    /// defaults; present fields must parse as their declared type. A present
    /// but blank numeric field fails validation like any other unparseable
    /// value, while a blank occupation is kept and resolves to the missing
    /// category inside the pipeline.
    pub fn from_request(request: &ScoreRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            age: parse_integer("age", request.age.as_deref(), DEFAULT_AGE)?,
            occupation: parse_occupation(request.occupation.as_deref()),
            website_visits: parse_integer(
                "website_visits",
                request.website_visits.as_deref(),
                DEFAULT_WEBSITE_VISITS,
            )?,
            annual_income: parse_decimal(
                "annual_income",
                request.annual_income.as_deref(),
                DEFAULT_ANNUAL_INCOME,
            )?,
            expenses: parse_decimal("expenses", request.expenses.as_deref(), DEFAULT_EXPENSES)?,
            credit_score: parse_score(
                "credit_score",
                request.credit_score.as_deref(),
                DEFAULT_CREDIT_SCORE,
            )?,
        })
    }
}

fn parse_occupation(raw: Option<&str>) -> String {
    match raw {
        Some(value) => value.trim().to_string(),
        None => DEFAULT_OCCUPATION.to_string(),
    }
}

fn parse_integer(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, ValidationError> {
    match raw.map(str::trim) {
        Some(value) => value.parse::<i64>().map_err(|_| ValidationError::InvalidInteger {
            field,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_decimal(
    field: &'static str,
    raw: Option<&str>,
    default: Decimal,
) -> Result<Decimal, ValidationError> {
    match raw.map(str::trim) {
        Some(value) => value.parse::<Decimal>().map_err(|_| ValidationError::InvalidDecimal {
            field,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_score(
    field: &'static str,
    raw: Option<&str>,
    default: f64,
) -> Result<f64, ValidationError> {
    match raw.map(str::trim) {
        Some(value) => {
            let parsed = value.parse::<f64>().map_err(|_| ValidationError::InvalidDecimal {
                field,
                value: value.to_string(),
            })?;
            if !parsed.is_finite() {
                return Err(ValidationError::NonFiniteNumber {
                    field,
                    value: value.to_string(),
                });
            }
            Ok(parsed)
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_yields_defaults() {
        let profile = CustomerProfile::from_request(&ScoreRequest::default()).unwrap();
        assert_eq!(profile, CustomerProfile::default());
        assert_eq!(profile.age, 30);
        assert_eq!(profile.occupation, "Professional");
        assert_eq!(profile.website_visits, 5);
        assert_eq!(profile.annual_income, dec!(50000));
        assert_eq!(profile.expenses, dec!(2000));
        assert!((profile.credit_score - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_numeric_field_is_rejected() {
        let request = ScoreRequest {
            age: Some("   ".to_string()),
            ..Default::default()
        };
        let err = CustomerProfile::from_request(&request).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInteger {
                field: "age",
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_blank_occupation_is_kept() {
        let request = ScoreRequest {
            occupation: Some("   ".to_string()),
            ..Default::default()
        };
        let profile = CustomerProfile::from_request(&request).unwrap();
        assert_eq!(profile.occupation, "");
    }

    #[test]
    fn test_all_fields_parsed() {
        let request = ScoreRequest {
            age: Some("42".to_string()),
            occupation: Some("Engineer".to_string()),
            website_visits: Some("12".to_string()),
            annual_income: Some("85000".to_string()),
            expenses: Some("3100.50".to_string()),
            credit_score: Some("812".to_string()),
        };
        let profile = CustomerProfile::from_request(&request).unwrap();
        assert_eq!(profile.age, 42);
        assert_eq!(profile.occupation, "Engineer");
        assert_eq!(profile.website_visits, 12);
        assert_eq!(profile.annual_income, dec!(85000));
        assert_eq!(profile.expenses, dec!(3100.50));
        assert!((profile.credit_score - 812.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whitespace_is_trimmed_before_parsing() {
        let request = ScoreRequest {
            age: Some(" 25 ".to_string()),
            occupation: Some("  Teacher  ".to_string()),
            ..Default::default()
        };
        let profile = CustomerProfile::from_request(&request).unwrap();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.occupation, "Teacher");
    }

    #[test]
    fn test_invalid_age_is_rejected() {
        let request = ScoreRequest {
            age: Some("forty".to_string()),
            ..Default::default()
        };
        let err = CustomerProfile::from_request(&request).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInteger {
                field: "age",
                value: "forty".to_string(),
            }
        );
    }

    #[test]
    fn test_fractional_visits_are_rejected() {
        let request = ScoreRequest {
            website_visits: Some("3.5".to_string()),
            ..Default::default()
        };
        let err = CustomerProfile::from_request(&request).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInteger {
                field: "website_visits",
                value: "3.5".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_income_is_rejected() {
        let request = ScoreRequest {
            annual_income: Some("lots".to_string()),
            ..Default::default()
        };
        let err = CustomerProfile::from_request(&request).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDecimal {
                field: "annual_income",
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_non_finite_credit_score_is_rejected() {
        for raw in ["nan", "inf", "-inf", "NaN", "infinity"] {
            let request = ScoreRequest {
                credit_score: Some(raw.to_string()),
                ..Default::default()
            };
            let err = CustomerProfile::from_request(&request).unwrap_err();
            assert_eq!(
                err,
                ValidationError::NonFiniteNumber {
                    field: "credit_score",
                    value: raw.to_string(),
                },
                "expected '{raw}' to be rejected as non-finite"
            );
        }
    }

    #[test]
    fn test_negative_values_parse() {
        let request = ScoreRequest {
            age: Some("-1".to_string()),
            expenses: Some("-500".to_string()),
            ..Default::default()
        };
        let profile = CustomerProfile::from_request(&request).unwrap();
        assert_eq!(profile.age, -1);
        assert_eq!(profile.expenses, dec!(-500));
    }
}
