/// Top-level error type for the phenology engine.
/// Every fallible operation in the workspace returns this via `PhenologyResult`.
#[derive(Debug, thiserror::Error)]
pub enum PhenologyError {
    #[error("scoring artifact not found: {path}")]
    ArtifactNotFound { path: String },

    #[error("scoring artifact corrupt at {path}: {reason}")]
    ArtifactCorrupt { path: String, reason: String },

    #[error("insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl PhenologyError {
    /// Stable machine-readable code for the host API layer.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactNotFound { .. } => "ARTIFACT_NOT_FOUND",
            Self::ArtifactCorrupt { .. } => "ARTIFACT_CORRUPT",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can fix this by supplying different input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::InvalidDate { .. } | Self::InvalidInput { .. }
        )
    }
}

/// Convenience type alias.
pub type PhenologyResult<T> = Result<T, PhenologyError>;
