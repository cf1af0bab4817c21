//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field so log
//! pipelines can filter on it.

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a fingerprint cache hit.
pub fn cache_hit(fingerprint: &str) {
    tracing::debug!(
        event = "cache_hit",
        fingerprint = %fingerprint,
        "prediction served from cache"
    );
}

/// Log a completed prediction.
pub fn prediction_completed(stage: &str, estimated_days: u32, confidence: u8, rule_based: bool) {
    tracing::info!(
        event = "prediction_completed",
        stage = %stage,
        estimated_days = estimated_days,
        confidence = confidence,
        rule_based = rule_based,
        "prediction completed"
    );
}

/// Log a completed validation.
pub fn validation_completed(quality: &str, accuracy_pct: f64, absolute_error_days: i64) {
    tracing::info!(
        event = "validation_completed",
        quality = %quality,
        accuracy_pct = accuracy_pct,
        absolute_error_days = absolute_error_days,
        "validation completed"
    );
}

/// Log a validation that suggests the model needs recalibration.
pub fn recalibration_suggested(quality: &str, correction_factor: f64) {
    tracing::warn!(
        event = "recalibration_suggested",
        quality = %quality,
        correction_factor = correction_factor,
        "prediction quality low, recalibration suggested"
    );
}
