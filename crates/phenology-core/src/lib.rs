//! # phenology-core
//!
//! Foundation crate for the phenology prediction engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dates;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PhenologyConfig;
pub use errors::{PhenologyError, PhenologyResult};
pub use models::{
    DetailedClimate, FeatureVector, PredictionRequest, PredictionResult, PredictionStage,
    ValidationRecord,
};
