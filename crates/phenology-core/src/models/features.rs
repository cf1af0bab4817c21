use serde::{Deserialize, Serialize};

/// Number of features every scorer consumes.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in vector order. Artifact weights are aligned to this.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "species_id",
    "genus_id",
    "climate_id",
    "location_id",
    "base_days",
    "species_climate_multiplier",
    "climate_adjustment",
    "heuristic_days",
];

/// Fixed-width numeric encoding of a prediction request.
///
/// Produced by the feature encoder, consumed by `IScorer`. Identical
/// normalized requests always encode to bit-identical vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const SPECIES_ID: usize = 0;
    pub const GENUS_ID: usize = 1;
    pub const CLIMATE_ID: usize = 2;
    pub const LOCATION_ID: usize = 3;
    pub const BASE_DAYS: usize = 4;
    pub const SPECIES_CLIMATE_MULTIPLIER: usize = 5;
    pub const CLIMATE_ADJUSTMENT: usize = 6;
    pub const HEURISTIC_DAYS: usize = 7;

    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// `base_days × species_climate_multiplier × climate_adjustment`, unrounded.
    pub fn heuristic_days(&self) -> f64 {
        self.0[Self::HEURISTIC_DAYS]
    }

    /// Dot product with a weight slice of the same width.
    ///
    /// Returns `None` on a width mismatch.
    pub fn dot(&self, weights: &[f64]) -> Option<f64> {
        if weights.len() != FEATURE_COUNT {
            return None;
        }
        Some(self.0.iter().zip(weights).map(|(x, w)| x * w).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_requires_matching_width() {
        let fv = FeatureVector::new([1.0; FEATURE_COUNT]);
        assert_eq!(fv.dot(&[1.0; FEATURE_COUNT]), Some(FEATURE_COUNT as f64));
        assert_eq!(fv.dot(&[1.0; 3]), None);
    }

    #[test]
    fn names_align_with_indices() {
        assert_eq!(FEATURE_NAMES[FeatureVector::LOCATION_ID], "location_id");
        assert_eq!(FEATURE_NAMES[FeatureVector::HEURISTIC_DAYS], "heuristic_days");
    }

    #[test]
    fn heuristic_days_reads_last_slot() {
        let mut values = [0.0; FEATURE_COUNT];
        values[FeatureVector::HEURISTIC_DAYS] = 144.0;
        assert_eq!(FeatureVector::new(values).heuristic_days(), 144.0);
    }
}
