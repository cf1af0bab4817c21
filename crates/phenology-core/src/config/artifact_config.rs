use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the scoring artifact tiers live and how each is recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Primary binary artifact.
    pub primary_path: PathBuf,
    /// Degraded compatibility artifact (same model, plain JSON).
    pub compat_path: PathBuf,
    /// Expected extension of the primary artifact, without the dot.
    pub primary_extension: String,
    /// Expected extension of the compatibility artifact, without the dot.
    pub compat_extension: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            primary_path: PathBuf::from(defaults::DEFAULT_PRIMARY_ARTIFACT_PATH),
            compat_path: PathBuf::from(defaults::DEFAULT_COMPAT_ARTIFACT_PATH),
            primary_extension: defaults::DEFAULT_PRIMARY_EXTENSION.to_string(),
            compat_extension: defaults::DEFAULT_COMPAT_EXTENSION.to_string(),
        }
    }
}
