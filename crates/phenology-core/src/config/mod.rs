pub mod artifact_config;
pub mod cache_config;
pub mod defaults;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use artifact_config::ArtifactConfig;
pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{PhenologyError, PhenologyResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PhenologyConfig {
    pub artifact: ArtifactConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl PhenologyConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load config from a TOML file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> PhenologyResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PhenologyError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
            .map_err(|e| PhenologyError::ConfigError(format!("{}: {e}", path.display())))
    }
}
