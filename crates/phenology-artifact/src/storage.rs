//! Local filesystem artifact storage.

use std::io::ErrorKind;
use std::path::Path;

use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::traits::IArtifactStorage;

/// Reads artifacts straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactStorage;

impl IArtifactStorage for FsArtifactStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> PhenologyResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PhenologyError::ArtifactNotFound {
                path: path.display().to_string(),
            },
            _ => PhenologyError::ArtifactCorrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })
    }
}
