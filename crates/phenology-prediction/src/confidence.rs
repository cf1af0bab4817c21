//! Confidence accumulation as an ordered rule list.

use phenology_core::constants::{
    CONFIDENCE_BASE, CONFIDENCE_CAP, CONFIDENCE_DETAILED_CLIMATE, CONFIDENCE_EVENT_DATE,
};

use crate::encoder::EncodedRequest;

/// One rule: when `applies` holds, add `delta`.
pub struct ConfidenceRule {
    pub name: &'static str,
    pub applies: fn(&EncodedRequest) -> bool,
    pub delta: fn(&EncodedRequest) -> u8,
}

/// Rules in application order. Every delta is non-negative, so adding an
/// input can never lower the total.
pub const RULES: &[ConfidenceRule] = &[
    ConfidenceRule {
        name: "event_date",
        applies: |e| e.normalized.event_date.is_some(),
        delta: |_| CONFIDENCE_EVENT_DATE,
    },
    ConfidenceRule {
        name: "detailed_climate",
        applies: |e| e.normalized.detailed_climate.is_some(),
        delta: |_| CONFIDENCE_DETAILED_CLIMATE,
    },
    ConfidenceRule {
        name: "refinement_type",
        applies: |e| e.refinement.is_some(),
        delta: |e| e.refinement.map_or(0, |r| r.confidence_delta()),
    },
];

/// Base confidence plus every applicable rule, capped once at the end.
pub fn accumulate(encoded: &EncodedRequest) -> u8 {
    let total: u32 = RULES
        .iter()
        .filter(|rule| (rule.applies)(encoded))
        .map(|rule| u32::from((rule.delta)(encoded)))
        .sum::<u32>()
        + u32::from(CONFIDENCE_BASE);
    total.min(u32::from(CONFIDENCE_CAP)) as u8
}
