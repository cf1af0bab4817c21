//! Accuracy arithmetic.

use phenology_core::models::{BiasDirection, PredictionQuality};

/// Error and accuracy figures for one estimate/observation pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyMetrics {
    pub absolute_error_days: i64,
    pub relative_error_pct: f64,
    pub accuracy_pct: f64,
    pub quality: PredictionQuality,
    pub bias_direction: BiasDirection,
    pub suggested_correction_factor: f64,
}

impl AccuracyMetrics {
    /// Relative error divides by the estimate alone. A zero estimate is
    /// treated as 100% error with a neutral correction factor.
    pub fn compute(estimated_days: i64, observed_days: i64) -> Self {
        let absolute_error_days = (observed_days - estimated_days).abs();

        let (relative_error_pct, suggested_correction_factor) = if estimated_days == 0 {
            (100.0, 1.0)
        } else {
            let estimated = estimated_days as f64;
            (
                absolute_error_days as f64 * 100.0 / estimated,
                observed_days as f64 / estimated,
            )
        };
        let accuracy_pct = (100.0 - relative_error_pct).max(0.0);

        let bias_direction = match observed_days.cmp(&estimated_days) {
            std::cmp::Ordering::Greater => BiasDirection::Slower,
            std::cmp::Ordering::Less => BiasDirection::Faster,
            std::cmp::Ordering::Equal => BiasDirection::Exact,
        };

        Self {
            absolute_error_days,
            relative_error_pct,
            accuracy_pct,
            quality: PredictionQuality::from_accuracy(accuracy_pct),
            bias_direction,
            suggested_correction_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hit() {
        let m = AccuracyMetrics::compute(100, 100);
        assert_eq!(m.absolute_error_days, 0);
        assert_eq!(m.accuracy_pct, 100.0);
        assert_eq!(m.quality, PredictionQuality::Excellent);
        assert_eq!(m.bias_direction, BiasDirection::Exact);
        assert_eq!(m.suggested_correction_factor, 1.0);
    }

    #[test]
    fn thirty_percent_late() {
        let m = AccuracyMetrics::compute(100, 130);
        assert_eq!(m.absolute_error_days, 30);
        assert_eq!(m.relative_error_pct, 30.0);
        assert_eq!(m.accuracy_pct, 70.0);
        assert_eq!(m.quality, PredictionQuality::Acceptable);
        assert_eq!(m.bias_direction, BiasDirection::Slower);
    }

    #[test]
    fn accuracy_floors_at_zero() {
        let m = AccuracyMetrics::compute(10, 40);
        assert_eq!(m.relative_error_pct, 300.0);
        assert_eq!(m.accuracy_pct, 0.0);
        assert_eq!(m.quality, PredictionQuality::Poor);
    }

    #[test]
    fn zero_estimate_is_full_error() {
        let m = AccuracyMetrics::compute(0, 12);
        assert_eq!(m.relative_error_pct, 100.0);
        assert_eq!(m.accuracy_pct, 0.0);
        assert_eq!(m.suggested_correction_factor, 1.0);
    }
}
