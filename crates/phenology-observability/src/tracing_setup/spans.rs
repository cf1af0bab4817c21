//! Span definitions per operation: prediction, validation, artifact load.

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($stage:expr, $fingerprint:expr) => {
        tracing::info_span!("phenology.prediction", stage = ?$stage, fingerprint = %$fingerprint)
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($prior_stage:expr, $observed_date:expr) => {
        tracing::info_span!(
            "phenology.validation",
            prior_stage = ?$prior_stage,
            observed_date = %$observed_date
        )
    };
}

/// Create an artifact load span.
#[macro_export]
macro_rules! artifact_span {
    ($strategies:expr) => {
        tracing::info_span!("phenology.artifact", strategies = $strategies)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "phenology.prediction";
    pub const VALIDATION: &str = "phenology.validation";
    pub const ARTIFACT: &str = "phenology.artifact";
}
