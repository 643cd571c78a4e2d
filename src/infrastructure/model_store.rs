use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::application::ml::pipeline::ScoringPipeline;

/// Reads and writes serialized pipeline artifacts as JSON files.
pub struct ModelStore {
    file_path: PathBuf,
}

impl ModelStore {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    pub fn load(&self) -> Result<ScoringPipeline> {
        let content =
            fs::read_to_string(&self.file_path).context("Failed to read model artifact")?;
        let pipeline: ScoringPipeline =
            serde_json::from_str(&content).context("Failed to parse model artifact JSON")?;
        Ok(pipeline)
    }

    pub fn save(&self, pipeline: &ScoringPipeline) -> Result<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).context("Failed to create model directory")?;
        }

        let content = serde_json::to_string(pipeline).context("Failed to serialize model")?;

        // Atomic write: write to temp file then rename
        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp model file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename model file")?;

        info!("Saved propensity model to {:?}", self.file_path);
        Ok(())
    }
}
