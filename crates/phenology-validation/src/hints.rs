//! Advisory strings attached to a validation record. Never control flow.

use phenology_core::constants::{
    HINT_ABSOLUTE_ERROR_DAYS, HINT_ACCURACY_PCT, HINT_RELATIVE_ERROR_PCT,
    MIN_PLAUSIBLE_OBSERVED_DAYS,
};

use crate::metrics::AccuracyMetrics;

pub const BROADEN_FACTORS: &str =
    "broaden environmental factors: record detailed climate measurements for this entry";
pub const REVIEW_SPECIES_PARAMETERS: &str =
    "re-examine species-specific parameters for this species/genus";
pub const COLLECT_SAMPLES: &str =
    "collect more samples for this species/condition combination";

/// Hints for improving future estimates.
pub fn improvement_hints(metrics: &AccuracyMetrics) -> Vec<String> {
    let mut hints = Vec::new();
    if metrics.absolute_error_days > HINT_ABSOLUTE_ERROR_DAYS {
        hints.push(BROADEN_FACTORS.to_string());
    }
    if metrics.relative_error_pct > HINT_RELATIVE_ERROR_PCT {
        hints.push(REVIEW_SPECIES_PARAMETERS.to_string());
    }
    if metrics.accuracy_pct < HINT_ACCURACY_PCT {
        hints.push(COLLECT_SAMPLES.to_string());
    }
    hints
}

/// Hints about the observation itself.
pub fn data_quality_hints(observed_days: i64) -> Vec<String> {
    let mut hints = Vec::new();
    if observed_days < MIN_PLAUSIBLE_OBSERVED_DAYS {
        hints.push(format!(
            "maturation observed implausibly early ({observed_days} days after the event); \
             check the recorded dates"
        ));
    }
    hints
}
