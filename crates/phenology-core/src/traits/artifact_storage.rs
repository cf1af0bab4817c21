use std::path::Path;

use crate::errors::PhenologyResult;

/// Read access to wherever scoring artifacts are stored.
pub trait IArtifactStorage: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Read the full artifact bytes.
    fn read(&self, path: &Path) -> PhenologyResult<Vec<u8>>;
}
