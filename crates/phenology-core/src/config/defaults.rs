//! Default values for every config section.

pub const DEFAULT_PRIMARY_ARTIFACT_PATH: &str = "models/maturation.bin";
pub const DEFAULT_COMPAT_ARTIFACT_PATH: &str = "models/maturation_compat.json";
pub const DEFAULT_PRIMARY_EXTENSION: &str = "bin";
pub const DEFAULT_COMPAT_EXTENSION: &str = "json";

/// One hour.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";
