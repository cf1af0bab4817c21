//! Refinement (pollination) types.

use phenology_core::constants::{
    CONFIDENCE_REFINEMENT_CROSS, CONFIDENCE_REFINEMENT_MANUAL, CONFIDENCE_REFINEMENT_NATURAL,
};
use phenology_core::errors::{PhenologyError, PhenologyResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementType {
    /// Hand pollination. Also `artificial`, `self`.
    Manual,
    Natural,
    /// Also `hybrid`, `hibrida`, `sibling`.
    Cross,
}

impl RefinementType {
    /// Parse normalized text. Unrecognized values are rejected.
    pub fn parse(text: &str) -> PhenologyResult<Self> {
        match text {
            "manual" | "artificial" | "self" => Ok(Self::Manual),
            "natural" => Ok(Self::Natural),
            "cross" | "hybrid" | "hibrida" | "híbrida" | "sibling" => Ok(Self::Cross),
            other => Err(PhenologyError::InvalidInput {
                field: "refinement_type".to_string(),
                reason: format!("unrecognized refinement type '{other}'"),
            }),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Natural => "natural",
            Self::Cross => "cross",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Manual => 0.95,
            Self::Natural => 1.05,
            Self::Cross => 1.0,
        }
    }

    pub fn confidence_delta(self) -> u8 {
        match self {
            Self::Manual => CONFIDENCE_REFINEMENT_MANUAL,
            Self::Natural => CONFIDENCE_REFINEMENT_NATURAL,
            Self::Cross => CONFIDENCE_REFINEMENT_CROSS,
        }
    }
}
