use std::sync::Arc;

use tracing::{error, warn};

use crate::application::ml::predictor::PropensityModel;
use crate::application::scoring::fallback::rule_based_probability;
use crate::domain::customer::{CustomerProfile, ScoreRequest};
use crate::domain::errors::ScoringError;
use crate::domain::metrics::CustomerMetrics;
use crate::domain::score::{ScoreResult, ScoreSource};

/// Scores customer requests against a propensity model.
///
/// Failures degrade in two tiers. A model failure falls back to rule based
/// scoring of the same profile. Anything else makes [`PropensityScorer::score`]
/// return the fixed service default result.
pub struct PropensityScorer {
    model: Arc<dyn PropensityModel>,
}

impl PropensityScorer {
    pub fn new(model: Arc<dyn PropensityModel>) -> Self {
        Self { model }
    }

    /// Score a raw request. Never fails: any error is logged and converted
    /// into the service default result.
    pub fn score(&self, request: &ScoreRequest) -> ScoreResult {
        match self.try_score(request) {
            Ok(result) => result,
            Err(e) => {
                error!("Scoring failed ({}). Returning service default result.", e);
                ScoreResult::service_default()
            }
        }
    }

    /// Score a raw request, surfacing validation and metric errors to the
    /// caller. Model failures are still absorbed by the rule based fallback.
    pub fn try_score(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoringError> {
        let profile = CustomerProfile::from_request(request)?;

        let (probability, source) = match self.model.predict_proba(&profile) {
            Ok(probability) => (probability, ScoreSource::Model),
            Err(e) => {
                warn!("Model prediction failed ({}). Using fallback scoring.", e);
                (rule_based_probability(&profile), ScoreSource::RuleFallback)
            }
        };

        let metrics = CustomerMetrics::calculate(&profile)?;
        Ok(ScoreResult::new(profile, probability, source, metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::infrastructure::mock::{FailingModel, MockModel};
    use rust_decimal_macros::dec;

    #[test]
    fn test_model_probability_is_reported() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.73)));
        let result = scorer.score(&ScoreRequest::default());
        assert!((result.probability - 0.73).abs() < 1e-12);
        assert_eq!(result.propensity_score, 73);
        assert_eq!(result.source, ScoreSource::Model);
        assert_eq!(result.profile, CustomerProfile::default());
    }

    #[test]
    fn test_model_failure_falls_back_to_rules() {
        let scorer = PropensityScorer::new(Arc::new(FailingModel));
        let request = ScoreRequest {
            credit_score: Some("750".to_string()),
            annual_income: Some("60000".to_string()),
            website_visits: Some("15".to_string()),
            ..Default::default()
        };
        let result = scorer.score(&request);
        assert!((result.probability - 0.8).abs() < 1e-12);
        assert_eq!(result.propensity_score, 80);
        assert_eq!(result.source, ScoreSource::RuleFallback);
    }

    #[test]
    fn test_invalid_input_yields_service_default() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.9)));
        let request = ScoreRequest {
            age: Some("not a number".to_string()),
            ..Default::default()
        };
        let result = scorer.score(&request);
        assert_eq!(result, ScoreResult::service_default());
    }

    #[test]
    fn test_try_score_surfaces_validation_errors() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.9)));
        let request = ScoreRequest {
            age: Some("not a number".to_string()),
            ..Default::default()
        };
        let err = scorer.try_score(&request).unwrap_err();
        assert_eq!(
            err,
            ScoringError::Validation(ValidationError::InvalidInteger {
                field: "age",
                value: "not a number".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_income_yields_service_default() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.9)));
        let request = ScoreRequest {
            annual_income: Some("0".to_string()),
            ..Default::default()
        };
        let result = scorer.score(&request);
        assert_eq!(result, ScoreResult::service_default());

        let err = scorer.try_score(&request).unwrap_err();
        assert!(matches!(err, ScoringError::MetricComputation { .. }));
    }

    #[test]
    fn test_result_echoes_coerced_profile() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.5)));
        let request = ScoreRequest {
            age: Some(" 44 ".to_string()),
            occupation: Some("Nurse".to_string()),
            ..Default::default()
        };
        let result = scorer.score(&request);
        assert_eq!(result.profile.age, 44);
        assert_eq!(result.profile.occupation, "Nurse");
        assert_eq!(result.profile.annual_income, dec!(50000));
    }

    #[test]
    fn test_metrics_accompany_model_score() {
        let scorer = PropensityScorer::new(Arc::new(MockModel::new(0.6)));
        let result = scorer.score(&ScoreRequest::default());
        assert!((result.metrics.expense_ratio - 48.0).abs() < 1e-9);
        assert!((result.metrics.engagement_score - 25.0).abs() < 1e-9);
    }
}
