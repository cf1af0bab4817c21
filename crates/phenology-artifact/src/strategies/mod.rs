//! Artifact load strategies, tried in order by the loader.

pub mod binary;
pub mod compat;
pub mod rule_based;

pub use binary::BinaryArtifactStrategy;
pub use compat::CompatArtifactStrategy;
pub use rule_based::RuleBasedStrategy;

use std::path::Path;

use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::ArtifactTier;
use phenology_core::traits::IArtifactStorage;

use crate::artifact::ScoringArtifact;

/// One tier of the artifact fallback chain.
pub trait LoadStrategy: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &str;

    fn tier(&self) -> ArtifactTier;

    /// Attempt to load. Errors move the loader on to the next tier.
    fn load(&self, storage: &dyn IArtifactStorage) -> PhenologyResult<ScoringArtifact>;
}

/// Existence, non-empty, and extension checks shared by file-backed tiers.
pub(crate) fn read_checked(
    storage: &dyn IArtifactStorage,
    path: &Path,
    extension: &str,
) -> PhenologyResult<Vec<u8>> {
    let display = path.display().to_string();
    if !storage.exists(path) {
        return Err(PhenologyError::ArtifactNotFound { path: display });
    }

    let matches_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if !matches_ext {
        return Err(PhenologyError::ArtifactCorrupt {
            path: display,
            reason: format!("expected .{extension} extension"),
        });
    }

    let bytes = storage.read(path)?;
    if bytes.is_empty() {
        return Err(PhenologyError::ArtifactCorrupt {
            path: display,
            reason: "file is empty".to_string(),
        });
    }
    Ok(bytes)
}
