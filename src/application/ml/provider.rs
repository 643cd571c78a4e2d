use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ml::pipeline::ScoringPipeline;
use crate::application::ml::predictor::PropensityModel;
use crate::infrastructure::model_store::ModelStore;

/// Supplies the scoring model for the application.
///
/// Falls back to an untrained pipeline skeleton when no usable artifact
/// exists, so the scorer always has a model to call. The skeleton fails
/// every prediction, which routes scoring through the rule based fallback.
pub struct ModelProvider {
    store: ModelStore,
}

impl ModelProvider {
    pub fn new(model_path: PathBuf) -> Self {
        Self {
            store: ModelStore::new(model_path),
        }
    }

    pub fn load(&self) -> Arc<dyn PropensityModel> {
        if !self.store.exists() {
            warn!(
                "No model artifact at {:?}. Using untrained pipeline skeleton.",
                self.store.path()
            );
            return Arc::new(ScoringPipeline::skeleton());
        }

        match self.store.load() {
            Ok(pipeline) => {
                info!("Loaded propensity model from {:?}", self.store.path());
                Arc::new(pipeline)
            }
            Err(e) => {
                warn!(
                    "Could not load propensity model ({:#}). Using untrained pipeline skeleton.",
                    e
                );
                Arc::new(ScoringPipeline::skeleton())
            }
        }
    }
}
