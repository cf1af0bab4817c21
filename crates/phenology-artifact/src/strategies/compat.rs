//! Compatibility tier: the same linear model as plain JSON, no binary header.

use std::path::PathBuf;

use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::ArtifactTier;
use phenology_core::traits::IArtifactStorage;
use tracing::debug;

use super::{read_checked, LoadStrategy};
use crate::artifact::{LinearModel, ScoringArtifact};

pub struct CompatArtifactStrategy {
    path: PathBuf,
    extension: String,
}

impl CompatArtifactStrategy {
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }
}

impl LoadStrategy for CompatArtifactStrategy {
    fn name(&self) -> &str {
        "compat-json"
    }

    fn tier(&self) -> ArtifactTier {
        ArtifactTier::Compat
    }

    fn load(&self, storage: &dyn IArtifactStorage) -> PhenologyResult<ScoringArtifact> {
        let bytes = read_checked(storage, &self.path, &self.extension)?;
        let model = LinearModel::from_json(&bytes).map_err(|reason| {
            PhenologyError::ArtifactCorrupt {
                path: self.path.display().to_string(),
                reason,
            }
        })?;
        debug!(model = %model.name, path = %self.path.display(), "compat artifact loaded");
        Ok(ScoringArtifact::new(
            ArtifactTier::Compat,
            Some(self.path.clone()),
            Box::new(model),
        ))
    }
}
