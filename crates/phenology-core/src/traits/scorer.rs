use crate::errors::PhenologyResult;
use crate::models::FeatureVector;

/// Turns an encoded request into a raw day estimate.
pub trait IScorer: Send + Sync {
    /// Score a feature vector. The result is unrounded and may be any finite value.
    fn score(&self, features: &FeatureVector) -> PhenologyResult<f64>;

    /// Human-readable scorer name.
    fn name(&self) -> &str;

    /// `false` for the rule-based stub.
    fn is_statistical(&self) -> bool;
}
