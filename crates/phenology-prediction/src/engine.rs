//! PredictionEngine: runs the stage state machine over encoder, artifact, and cache.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::NaiveDate;
use phenology_artifact::{ArtifactLoader, ScoringArtifact};
use phenology_core::constants::MIN_ESTIMATED_DAYS;
use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::{
    ArtifactInfo, ArtifactTier, InitialComparison, PredictionRequest, PredictionResult,
    PredictionStage, Refinements, ScoringSource, ValidationRecord,
};
use phenology_core::traits::IPredictionCache;
use phenology_core::PhenologyConfig;
use phenology_observability::degradation::{DegradationTracker, TrackedDegradation};
use phenology_observability::prediction_span;
use phenology_observability::tracing_setup::events;
use phenology_validation::Validator;
use rayon::prelude::*;
use tracing::{debug, error};

use crate::adjustments::{detailed_climate_factor, refinement_factor};
use crate::cache::FingerprintCache;
use crate::confidence;
use crate::encoder::{EncodedRequest, FeatureEncoder};
use crate::fingerprint::fingerprint;

const LOADER_COMPONENT: &str = "artifact_loader";

/// Staged prediction engine.
///
/// Owns the artifact loader and holds the fingerprint cache by trait object,
/// so a host can supply a shared cache service instead of the in-process one.
pub struct PredictionEngine {
    encoder: FeatureEncoder,
    loader: ArtifactLoader,
    cache: Arc<dyn IPredictionCache>,
    ttl: Duration,
    validator: Validator,
    degradations: Mutex<DegradationTracker>,
}

impl PredictionEngine {
    /// Build from config: filesystem artifact chain plus an in-process cache.
    pub fn new(config: &PhenologyConfig) -> Self {
        Self::with_parts(
            ArtifactLoader::from_config(&config.artifact),
            Arc::new(FingerprintCache::from_config(&config.cache)),
            config.cache.ttl(),
        )
    }

    /// Build from explicit collaborators.
    pub fn with_parts(
        loader: ArtifactLoader,
        cache: Arc<dyn IPredictionCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            encoder: FeatureEncoder::new(),
            loader,
            cache,
            ttl,
            validator: Validator::new(),
            degradations: Mutex::new(DegradationTracker::new()),
        }
    }

    /// Estimate from identity, coarse climate, and location only.
    ///
    /// Any event date or refinement fields on `request` are ignored.
    pub fn predict_initial(&self, request: &PredictionRequest) -> PhenologyResult<PredictionResult> {
        self.predict_refined(&request.initial_view())
    }

    /// Estimate from every field present on `request`.
    ///
    /// The stage follows from the inputs: refinements make it `Refined`, an
    /// event date alone makes it `BasicWithDate`, otherwise `Initial`.
    pub fn predict_refined(&self, request: &PredictionRequest) -> PhenologyResult<PredictionResult> {
        let encoded = self.encode_checked(request)?;
        let key = fingerprint(&encoded.normalized);
        if let Some(hit) = self.cached(&key) {
            return Ok(hit);
        }

        let span = prediction_span!(stage_for(&encoded), key);
        let _guard = span.enter();

        let artifact = self.artifact()?;
        let model_estimate = artifact.score(&encoded.features)?;
        let result = assemble(&encoded, model_estimate, artifact.scoring_source())?;

        self.store(key, &result);
        Ok(result)
    }

    /// Apply `additions` on top of `prior` without re-scoring the artifact.
    ///
    /// Returns exactly what `predict_refined` would for the merged request,
    /// reusing the prior's unrounded model estimate.
    pub fn refine(
        &self,
        prior: &PredictionResult,
        additions: &Refinements,
    ) -> PhenologyResult<PredictionResult> {
        if !prior.stage.is_refinable() {
            return Err(PhenologyError::InvalidInput {
                field: "stage".to_string(),
                reason: format!("a {:?} prediction cannot be refined", prior.stage),
            });
        }

        let merged = prior.inputs_snapshot.merged_with(additions);
        let encoded = self.encode_checked(&merged)?;

        // Merging only adds inputs, so the stage can only move forward.
        let next = stage_for(&encoded);
        if !prior.stage.can_transition_to(next) {
            error!(from = ?prior.stage, to = ?next, "illegal stage transition");
            return Err(PhenologyError::InternalError(format!(
                "cannot move a {:?} prediction to {next:?}",
                prior.stage
            )));
        }

        let key = fingerprint(&encoded.normalized);
        if let Some(hit) = self.cached(&key) {
            return Ok(hit);
        }

        let span = prediction_span!(next, key);
        let _guard = span.enter();

        let result = assemble(&encoded, prior.model_estimate, prior.scoring_source.clone())?;
        self.store(key, &result);
        Ok(result)
    }

    /// Predict many requests in parallel. One result per input, in input order.
    pub fn predict_batch(
        &self,
        requests: &[PredictionRequest],
    ) -> Vec<PhenologyResult<PredictionResult>> {
        requests
            .par_iter()
            .map(|request| self.predict_refined(request))
            .collect()
    }

    /// Grade a prior prediction against the observed date.
    pub fn validate(
        &self,
        prior: &PredictionResult,
        observed_date: NaiveDate,
    ) -> PhenologyResult<ValidationRecord> {
        self.validator.validate(prior, observed_date)
    }

    /// As [`validate`](Self::validate), with the observed date as `YYYY-MM-DD` text.
    pub fn validate_str(
        &self,
        prior: &PredictionResult,
        observed_date: &str,
    ) -> PhenologyResult<ValidationRecord> {
        self.validator.validate_str(prior, observed_date)
    }

    /// Describe the active artifact, loading it if needed.
    pub fn artifact_info(&self) -> PhenologyResult<ArtifactInfo> {
        Ok(self.artifact()?.info())
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Drop the loaded artifact and every result scored with it.
    pub fn clear_artifact(&self) {
        self.loader.clear();
        self.cache.clear();
    }

    /// Fallbacks currently in effect.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().active_degradations().into_iter().cloned().collect()
    }

    /// Whether predictions are currently scored by a fallback tier.
    pub fn artifact_degraded(&self) -> bool {
        self.tracker().is_degraded(LOADER_COMPONENT)
    }

    /// Artifact fallbacks recorded in the last `window_secs` seconds.
    pub fn recent_artifact_fallbacks(&self, window_secs: i64) -> usize {
        self.tracker().count_recent(LOADER_COMPONENT, window_secs)
    }

    /// How long the artifact has been served from a fallback tier, or `None`.
    pub fn artifact_degraded_for(&self) -> Option<chrono::Duration> {
        self.tracker().degraded_duration(LOADER_COMPONENT)
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        match self.degradations.lock() {
            Ok(tracker) => tracker,
            Err(poison) => poison.into_inner(),
        }
    }

    fn encode_checked(&self, request: &PredictionRequest) -> PhenologyResult<EncodedRequest> {
        if !request.has_identity() {
            return Err(PhenologyError::InsufficientData {
                reason: "species or genus is required".to_string(),
            });
        }
        self.encoder.encode(request)
    }

    fn cached(&self, key: &str) -> Option<PredictionResult> {
        let hit = self.cache.get(key)?;
        events::cache_hit(key);
        Some(hit)
    }

    fn store(&self, key: String, result: &PredictionResult) {
        events::prediction_completed(
            stage_label(result.stage),
            result.estimated_days,
            result.confidence,
            result.scoring_source.is_rule_based(),
        );
        self.cache.put(key, result.clone(), self.ttl);
    }

    /// Load (or reuse) the artifact, syncing loader fallbacks into the tracker.
    fn artifact(&self) -> PhenologyResult<Arc<ScoringArtifact>> {
        let cold = self.loader.cached()?.is_none();
        let artifact = self.loader.load()?;
        if cold {
            self.sync_degradations(&artifact);
        }
        Ok(artifact)
    }

    fn sync_degradations(&self, artifact: &ScoringArtifact) {
        let drained = self.loader.drain_events();
        let mut tracker = self.tracker();
        if drained.is_empty() {
            if artifact.tier() == ArtifactTier::Primary {
                tracker.mark_recovered(LOADER_COMPONENT);
            }
            return;
        }
        // A fresh fallback supersedes whatever was recorded before.
        tracker.mark_recovered(LOADER_COMPONENT);
        for event in drained {
            tracker.record(event);
        }
    }
}

/// Stage implied by the inputs present.
fn stage_for(encoded: &EncodedRequest) -> PredictionStage {
    let normalized = &encoded.normalized;
    if normalized.detailed_climate.is_some() || encoded.refinement.is_some() {
        PredictionStage::Refined
    } else if normalized.event_date.is_some() {
        PredictionStage::BasicWithDate
    } else {
        PredictionStage::Initial
    }
}

fn stage_label(stage: PredictionStage) -> &'static str {
    match stage {
        PredictionStage::Initial => "initial",
        PredictionStage::BasicWithDate => "basic_with_date",
        PredictionStage::Refined => "refined",
        PredictionStage::Validated => "validated",
    }
}

/// Round once and clamp to at least one day.
fn round_days(estimate: f64) -> u32 {
    estimate
        .round()
        .clamp(f64::from(MIN_ESTIMATED_DAYS), f64::from(u32::MAX)) as u32
}

/// Build the result for `encoded` from an unrounded model estimate.
fn assemble(
    encoded: &EncodedRequest,
    model_estimate: f64,
    scoring_source: ScoringSource,
) -> PhenologyResult<PredictionResult> {
    let stage = stage_for(encoded);
    let normalized = &encoded.normalized;

    let mut factors = vec![
        encoded.species.matched.factor().to_string(),
        "climate_basic".to_string(),
    ];
    let mut adjusted = model_estimate;
    if let Some(climate) = &normalized.detailed_climate {
        adjusted *= detailed_climate_factor(climate);
        factors.push("detailed_climate".to_string());
    }
    if let Some(refinement) = encoded.refinement {
        adjusted *= refinement_factor(refinement);
        factors.push("refinement_type".to_string());
    }
    if !adjusted.is_finite() {
        return Err(PhenologyError::InternalError(format!(
            "adjusted estimate is not finite (model estimate {model_estimate})"
        )));
    }

    let estimated_days = round_days(adjusted);
    let estimated_date = match normalized.event_date {
        Some(event) => Some(
            event
                .checked_add_days(chrono::Days::new(u64::from(estimated_days)))
                .ok_or_else(|| PhenologyError::InvalidDate {
                    value: event.to_string(),
                    reason: format!("adding {estimated_days} days overflows the calendar"),
                })?,
        ),
        None => None,
    };

    let comparison_with_initial = (stage == PredictionStage::Refined).then(|| {
        let initial_days = round_days(model_estimate);
        InitialComparison {
            initial_days,
            initial_confidence: phenology_core::constants::CONFIDENCE_BASE,
            delta_days: estimated_days as i32 - initial_days as i32,
        }
    });

    debug!(
        ?stage,
        model_estimate,
        adjusted,
        estimated_days,
        "prediction assembled"
    );

    Ok(PredictionResult {
        stage,
        estimated_days,
        estimated_date,
        confidence: confidence::accumulate(encoded),
        factors_considered: factors,
        inputs_snapshot: normalized.clone(),
        scoring_source,
        model_estimate,
        comparison_with_initial,
    })
}
