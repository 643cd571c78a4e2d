//! Mock model implementations for tests.

use crate::application::ml::predictor::PropensityModel;
use crate::domain::customer::CustomerProfile;
use crate::domain::errors::ModelError;

/// Model that always returns a fixed probability.
#[derive(Debug, Clone)]
pub struct MockModel {
    probability: f64,
}

impl MockModel {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl PropensityModel for MockModel {
    fn predict_proba(&self, _profile: &CustomerProfile) -> Result<f64, ModelError> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "Mock"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Model that fails every prediction, for exercising fallback paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingModel;

impl PropensityModel for FailingModel {
    fn predict_proba(&self, _profile: &CustomerProfile) -> Result<f64, ModelError> {
        Err(ModelError::NotFitted)
    }

    fn name(&self) -> &str {
        "Failing Mock"
    }

    fn version(&self) -> &str {
        "test"
    }
}
