//! The Validator: grades a prior prediction against an observed date.

use chrono::{Days, NaiveDate};
use phenology_core::dates::parse_date;
use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::{PredictionResult, PredictionStage, ValidationRecord};
use phenology_observability::tracing_setup::events;
use phenology_observability::validation_span;
use tracing::debug;

use crate::hints;
use crate::metrics::AccuracyMetrics;

/// Stateless validator. Always raises rather than returning a partial record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `prior` against the date maturation was observed.
    ///
    /// The prior must carry both its anchor `event_date` and the derived
    /// `estimated_date`, and they must agree with `estimated_days`. An
    /// observation before the event is an `InvalidDate`.
    pub fn validate(
        &self,
        prior: &PredictionResult,
        observed_date: NaiveDate,
    ) -> PhenologyResult<ValidationRecord> {
        let span = validation_span!(prior.stage, observed_date);
        let _guard = span.enter();

        let (event_date, estimated_date) = match (prior.event_date(), prior.estimated_date) {
            (Some(event), Some(estimated)) => (event, estimated),
            _ => {
                return Err(PhenologyError::InsufficientData {
                    reason: "prior prediction has no event date; validation needs an anchored estimate"
                        .to_string(),
                })
            }
        };

        if !prior.stage.can_transition_to(PredictionStage::Validated) {
            return Err(PhenologyError::InvalidInput {
                field: "stage".to_string(),
                reason: format!("a {:?} prediction cannot be validated", prior.stage),
            });
        }

        let expected = event_date
            .checked_add_days(Days::new(u64::from(prior.estimated_days)))
            .ok_or_else(|| PhenologyError::InvalidDate {
                value: event_date.to_string(),
                reason: format!(
                    "adding {} estimated days overflows the calendar",
                    prior.estimated_days
                ),
            })?;
        if expected != estimated_date {
            return Err(PhenologyError::InvalidDate {
                value: estimated_date.to_string(),
                reason: format!(
                    "estimated date disagrees with event date {event_date} plus {} days ({expected})",
                    prior.estimated_days
                ),
            });
        }

        let observed_days = (observed_date - event_date).num_days();
        if observed_days < 0 {
            return Err(PhenologyError::InvalidDate {
                value: observed_date.to_string(),
                reason: format!("observed date is before the event date {event_date}"),
            });
        }

        let metrics = AccuracyMetrics::compute(i64::from(prior.estimated_days), observed_days);
        let improvement_hints = hints::improvement_hints(&metrics);
        let data_quality_hints = hints::data_quality_hints(observed_days);
        if !data_quality_hints.is_empty() {
            debug!(observed_days, "observation flagged for data quality");
        }

        let record = ValidationRecord {
            stage: PredictionStage::Validated,
            prior_stage: prior.stage,
            event_date,
            estimated_date,
            observed_date,
            estimated_days: prior.estimated_days,
            observed_days,
            absolute_error_days: metrics.absolute_error_days,
            relative_error_pct: metrics.relative_error_pct,
            accuracy_pct: metrics.accuracy_pct,
            quality: metrics.quality,
            bias_direction: metrics.bias_direction,
            suggested_correction_factor: metrics.suggested_correction_factor,
            improvement_hints,
            data_quality_hints,
        };

        let quality = format!("{:?}", record.quality);
        events::validation_completed(&quality, record.accuracy_pct, record.absolute_error_days);
        if record.needs_recalibration() {
            events::recalibration_suggested(&quality, record.suggested_correction_factor);
        }
        Ok(record)
    }

    /// Validate with the observed date as `YYYY-MM-DD` text.
    pub fn validate_str(
        &self,
        prior: &PredictionResult,
        observed_date: &str,
    ) -> PhenologyResult<ValidationRecord> {
        let observed = parse_date(observed_date)?;
        self.validate(prior, observed)
    }
}
