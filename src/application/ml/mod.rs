pub mod pipeline;
pub mod predictor;
pub mod preprocessing;
pub mod provider;
