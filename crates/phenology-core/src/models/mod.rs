mod artifact_info;
mod degradation_event;
mod features;
mod prediction_result;
mod request;
mod validation_record;

pub use artifact_info::{ArtifactInfo, ArtifactTier};
pub use degradation_event::DegradationEvent;
pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use prediction_result::{
    ConfidenceLevel, InitialComparison, PredictionResult, PredictionStage, ScoringSource,
};
pub use request::{normalize_text, DetailedClimate, PredictionRequest, Refinements};
pub use validation_record::{BiasDirection, PredictionQuality, ValidationRecord};
