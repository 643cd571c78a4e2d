//! Configuration module for the propensity scoring service.
//!
//! All settings are loaded from environment variables with defaults, so the
//! binary starts without any configuration present.

use std::env;
use std::path::PathBuf;

/// Default location of the serialized pipeline artifact.
pub const DEFAULT_MODEL_PATH: &str = "data/propensity_model.json";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path the model provider reads the fitted pipeline from.
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("PROPENSITY_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),
        }
    }
}
