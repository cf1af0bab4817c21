//! # phenology-validation
//!
//! Compares a prior `PredictionResult` against the observed maturation date
//! and grades it. Stateless per call: the prior is read, never mutated.

pub mod hints;
pub mod metrics;
pub mod validator;

pub use metrics::AccuracyMetrics;
pub use validator::Validator;
