use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::request::PredictionRequest;
use crate::constants::{CONFIDENCE_LEVEL_HIGH, CONFIDENCE_LEVEL_MEDIUM};

/// Which inputs contributed to a prediction.
///
/// `Initial → Refined → Validated`, with `BasicWithDate` as a side branch of
/// `Initial` reached when only the anchor date is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PredictionStage {
    Initial,
    BasicWithDate,
    Refined,
    /// Terminal. Only carried by `ValidationRecord`.
    Validated,
}

impl PredictionStage {
    /// Whether a prediction at this stage can still be refined.
    pub fn is_refinable(self) -> bool {
        !matches!(self, Self::Validated)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: PredictionStage) -> bool {
        use PredictionStage::*;
        matches!(
            (self, next),
            (Initial, Initial)
                | (Initial, BasicWithDate)
                | (Initial, Refined)
                | (BasicWithDate, BasicWithDate)
                | (BasicWithDate, Refined)
                | (Refined, Refined)
                | (BasicWithDate, Validated)
                | (Refined, Validated)
        )
    }
}

/// What produced the raw estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringSource {
    /// A statistical model artifact.
    Model { name: String },
    /// The built-in rule-based stub; no statistical model was available.
    RuleBased,
}

impl ScoringSource {
    pub fn is_rule_based(&self) -> bool {
        matches!(self, Self::RuleBased)
    }
}

/// How a refined estimate moved relative to the initial-stage estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InitialComparison {
    pub initial_days: u32,
    pub initial_confidence: u8,
    /// `estimated_days − initial_days`.
    pub delta_days: i32,
}

/// Coarse label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

/// Output of the stage engine. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub stage: PredictionStage,
    /// Always ≥ 1.
    pub estimated_days: u32,
    /// Present only once the anchor event date is known.
    pub estimated_date: Option<NaiveDate>,
    /// 0–100.
    pub confidence: u8,
    /// Refinements applied, in application order.
    pub factors_considered: Vec<String>,
    /// Normalized inputs that produced this result.
    pub inputs_snapshot: PredictionRequest,
    pub scoring_source: ScoringSource,
    /// Unrounded artifact score before stage adjustments.
    pub model_estimate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_with_initial: Option<InitialComparison>,
}

impl PredictionResult {
    /// Anchor event date the estimate was derived from.
    pub fn event_date(&self) -> Option<NaiveDate> {
        self.inputs_snapshot.event_date
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        if self.confidence >= CONFIDENCE_LEVEL_HIGH {
            ConfidenceLevel::High
        } else if self.confidence >= CONFIDENCE_LEVEL_MEDIUM {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}
