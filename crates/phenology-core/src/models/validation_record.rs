use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction_result::PredictionStage;
use crate::constants::{QUALITY_ACCEPTABLE, QUALITY_EXCELLENT, QUALITY_FAIR, QUALITY_GOOD};

/// Five-bucket accuracy grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PredictionQuality {
    Poor,
    Fair,
    Acceptable,
    Good,
    Excellent,
}

impl PredictionQuality {
    /// Bucket an `accuracy_pct` value.
    pub fn from_accuracy(accuracy_pct: f64) -> Self {
        if accuracy_pct >= QUALITY_EXCELLENT {
            Self::Excellent
        } else if accuracy_pct >= QUALITY_GOOD {
            Self::Good
        } else if accuracy_pct >= QUALITY_ACCEPTABLE {
            Self::Acceptable
        } else if accuracy_pct >= QUALITY_FAIR {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Observed duration relative to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BiasDirection {
    /// Took longer than estimated.
    Slower,
    /// Finished sooner than estimated.
    Faster,
    Exact,
}

/// Outcome of validating a prior prediction against an observed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationRecord {
    /// Always `Validated`.
    pub stage: PredictionStage,
    pub prior_stage: PredictionStage,
    pub event_date: NaiveDate,
    pub estimated_date: NaiveDate,
    pub observed_date: NaiveDate,
    pub estimated_days: u32,
    pub observed_days: i64,
    pub absolute_error_days: i64,
    pub relative_error_pct: f64,
    pub accuracy_pct: f64,
    pub quality: PredictionQuality,
    pub bias_direction: BiasDirection,
    /// `observed_days / estimated_days`.
    pub suggested_correction_factor: f64,
    /// Advisory strings for improving future estimates.
    pub improvement_hints: Vec<String>,
    /// Advisory strings about the observed data itself.
    pub data_quality_hints: Vec<String>,
}

impl ValidationRecord {
    /// Fair and Poor outcomes warrant a recalibration alert.
    pub fn needs_recalibration(&self) -> bool {
        self.quality <= PredictionQuality::Fair
    }
}
