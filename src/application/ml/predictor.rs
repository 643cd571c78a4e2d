use crate::domain::customer::CustomerProfile;
use crate::domain::errors::ModelError;

/// Interface for propensity models
pub trait PropensityModel: Send + Sync {
    /// Predict the purchase probability (0.0 to 1.0) for a profile
    fn predict_proba(&self, profile: &CustomerProfile) -> Result<f64, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
