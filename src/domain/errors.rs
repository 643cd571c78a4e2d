use thiserror::Error;

/// Errors raised while coercing raw request fields into a customer profile.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid integer for '{field}': '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Invalid decimal for '{field}': '{value}'")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Non-finite number for '{field}': '{value}'")]
    NonFiniteNumber { field: &'static str, value: String },
}

/// Errors raised by the scoring pipeline and its preprocessing stages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Model is not fitted")]
    NotFitted,

    #[error("Unknown category for '{feature}': '{value}'")]
    UnknownCategory { feature: &'static str, value: String },

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model fitting failed: {reason}")]
    FitFailed { reason: String },

    #[error("Model inference failed: {reason}")]
    InferenceFailed { reason: String },
}

/// Top-level scoring errors. Anything that escapes to this level makes the
/// scorer return the service default result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Metric computation failed for '{metric}': {reason}")]
    MetricComputation { metric: &'static str, reason: String },
}
