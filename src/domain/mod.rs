// Customer profile and request coercion
pub mod customer;

// Domain-specific error types
pub mod errors;

// Feature definitions for the scoring pipeline
pub mod ml;

// Profile metrics shown alongside the score
pub mod metrics;

// Scoring outcome types
pub mod score;
