//! # phenology-prediction
//!
//! Progressive maturation estimates. A request is normalized and encoded,
//! scored by the shared artifact, then adjusted by whichever refinements
//! are present:
//!
//! | Stage | Inputs | Confidence |
//! |-------|--------|------------|
//! | Initial | species/genus, climate, location | 40 |
//! | BasicWithDate | + event date | 60 |
//! | Refined | + detailed climate and/or refinement type | up to 95 |
//!
//! Results are memoized by request fingerprint. Validation against an
//! observed date is delegated to `phenology-validation`.

pub mod adjustments;
pub mod cache;
pub mod confidence;
pub mod encoder;
pub mod engine;
pub mod fingerprint;

pub use cache::FingerprintCache;
pub use encoder::{EncodedRequest, FeatureEncoder};
pub use engine::PredictionEngine;
pub use fingerprint::fingerprint;
