// Model pipeline, preprocessing and model loading
pub mod ml;

// Scoring workflow and rule based fallback
pub mod scoring;
