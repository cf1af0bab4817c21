//! Multiplicative stage adjustments and detailed-climate range checks.
//!
//! Adjustments compose by plain multiplication on the unrounded estimate.
//! Rounding happens once, in the engine, after every factor is applied.

use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::DetailedClimate;

use crate::encoder::RefinementType;

pub const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 60.0);
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
pub const PRECIPITATION_RANGE: (f64, f64) = (0.0, 1000.0);

/// Temperature band factor.
pub fn temperature_factor(celsius: f64) -> f64 {
    if celsius < 15.0 {
        1.3
    } else if celsius > 30.0 {
        0.8
    } else if (20.0..=25.0).contains(&celsius) {
        0.9
    } else {
        1.0
    }
}

pub fn humidity_factor(pct: f64) -> f64 {
    if pct > 80.0 {
        1.1
    } else if pct < 40.0 {
        1.2
    } else {
        1.0
    }
}

pub fn precipitation_factor(mm: f64) -> f64 {
    if mm > 100.0 {
        1.1
    } else if mm < 20.0 {
        1.05
    } else {
        1.0
    }
}

/// Combined factor for whichever measurements are present.
pub fn detailed_climate_factor(climate: &DetailedClimate) -> f64 {
    climate.avg_temperature.map_or(1.0, temperature_factor)
        * climate.humidity_pct.map_or(1.0, humidity_factor)
        * climate.precipitation_mm.map_or(1.0, precipitation_factor)
}

pub fn refinement_factor(refinement: RefinementType) -> f64 {
    refinement.multiplier()
}

/// Reject non-finite or out-of-range measurements.
pub fn check_detailed_climate(climate: &DetailedClimate) -> PhenologyResult<()> {
    check_range("avg_temperature", climate.avg_temperature, TEMPERATURE_RANGE)?;
    check_range("humidity_pct", climate.humidity_pct, HUMIDITY_RANGE)?;
    check_range("precipitation_mm", climate.precipitation_mm, PRECIPITATION_RANGE)
}

fn check_range(field: &str, value: Option<f64>, (min, max): (f64, f64)) -> PhenologyResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < min || v > max => Err(PhenologyError::InvalidInput {
            field: field.to_string(),
            reason: format!("{v} outside [{min}, {max}]"),
        }),
        _ => Ok(()),
    }
}
