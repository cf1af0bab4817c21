//! Primary tier: marker-prefixed binary artifact.

use std::path::PathBuf;

use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::ArtifactTier;
use phenology_core::traits::IArtifactStorage;
use tracing::debug;

use super::{read_checked, LoadStrategy};
use crate::artifact::{LinearModel, ScoringArtifact};

pub struct BinaryArtifactStrategy {
    path: PathBuf,
    extension: String,
}

impl BinaryArtifactStrategy {
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }
}

impl LoadStrategy for BinaryArtifactStrategy {
    fn name(&self) -> &str {
        "primary-binary"
    }

    fn tier(&self) -> ArtifactTier {
        ArtifactTier::Primary
    }

    fn load(&self, storage: &dyn IArtifactStorage) -> PhenologyResult<ScoringArtifact> {
        let bytes = read_checked(storage, &self.path, &self.extension)?;
        let model = LinearModel::from_binary(&bytes).map_err(|reason| {
            PhenologyError::ArtifactCorrupt {
                path: self.path.display().to_string(),
                reason,
            }
        })?;
        debug!(model = %model.name, path = %self.path.display(), "primary artifact loaded");
        Ok(ScoringArtifact::new(
            ArtifactTier::Primary,
            Some(self.path.clone()),
            Box::new(model),
        ))
    }
}
