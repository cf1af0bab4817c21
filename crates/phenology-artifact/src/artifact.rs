//! The loaded scoring artifact and the scorers it can wrap.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use phenology_core::constants::{ARTIFACT_FORMAT_VERSION, ARTIFACT_MAGIC};
use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::{ArtifactInfo, ArtifactTier, FeatureVector, ScoringSource, FEATURE_COUNT};
use phenology_core::traits::IScorer;
use serde::{Deserialize, Serialize};

/// A loaded, read-only scoring artifact.
///
/// Created once by the loader and shared behind an `Arc` by every
/// prediction until the loader's slot is cleared.
pub struct ScoringArtifact {
    tier: ArtifactTier,
    path: Option<PathBuf>,
    scorer: Box<dyn IScorer>,
    loaded_at: DateTime<Utc>,
}

impl ScoringArtifact {
    pub fn new(tier: ArtifactTier, path: Option<PathBuf>, scorer: Box<dyn IScorer>) -> Self {
        Self {
            tier,
            path,
            scorer,
            loaded_at: Utc::now(),
        }
    }

    /// Score a feature vector. Non-finite output is an internal error.
    pub fn score(&self, features: &FeatureVector) -> PhenologyResult<f64> {
        let raw = self.scorer.score(features)?;
        if !raw.is_finite() {
            return Err(PhenologyError::InternalError(format!(
                "scorer '{}' produced a non-finite estimate",
                self.scorer.name()
            )));
        }
        Ok(raw)
    }

    pub fn tier(&self) -> ArtifactTier {
        self.tier
    }

    pub fn name(&self) -> &str {
        self.scorer.name()
    }

    pub fn is_statistical(&self) -> bool {
        self.scorer.is_statistical()
    }

    pub fn scoring_source(&self) -> ScoringSource {
        if self.scorer.is_statistical() {
            ScoringSource::Model {
                name: self.scorer.name().to_string(),
            }
        } else {
            ScoringSource::RuleBased
        }
    }

    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            tier: self.tier,
            name: self.scorer.name().to_string(),
            path: self.path.as_ref().map(|p| p.display().to_string()),
            feature_count: FEATURE_COUNT as u32,
            statistical: self.scorer.is_statistical(),
            loaded_at: self.loaded_at,
        }
    }
}

impl fmt::Debug for ScoringArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringArtifact")
            .field("tier", &self.tier)
            .field("name", &self.scorer.name())
            .field("path", &self.path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

/// Linear regression over the encoded feature vector.
///
/// `score = intercept + Σ weights[i] · features[i]`, with weights aligned to
/// `FEATURE_NAMES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub name: String,
    #[serde(default)]
    pub version: u32,
    pub intercept: f64,
    pub weights: Vec<f64>,
}

impl LinearModel {
    /// Parse and check a JSON-encoded model.
    pub fn from_json(bytes: &[u8]) -> Result<Self, String> {
        let model: Self = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        model.check()?;
        Ok(model)
    }

    /// Parse a primary-tier payload: marker, version byte, JSON body.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, String> {
        let header_len = ARTIFACT_MAGIC.len() + 1;
        if bytes.len() <= header_len || &bytes[..ARTIFACT_MAGIC.len()] != ARTIFACT_MAGIC {
            return Err("missing artifact marker".to_string());
        }
        let version = bytes[ARTIFACT_MAGIC.len()];
        if version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {version}, expected {ARTIFACT_FORMAT_VERSION}"
            ));
        }
        Self::from_json(&bytes[header_len..])
    }

    /// Encode as a primary-tier payload.
    pub fn to_binary(&self) -> PhenologyResult<Vec<u8>> {
        let body = serde_json::to_vec(self)?;
        let mut out = Vec::with_capacity(ARTIFACT_MAGIC.len() + 1 + body.len());
        out.extend_from_slice(ARTIFACT_MAGIC);
        out.push(ARTIFACT_FORMAT_VERSION);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn check(&self) -> Result<(), String> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {FEATURE_COUNT} weights, found {}",
                self.weights.len()
            ));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err("non-finite coefficient".to_string());
        }
        Ok(())
    }
}

impl IScorer for LinearModel {
    fn score(&self, features: &FeatureVector) -> PhenologyResult<f64> {
        let dot = features.dot(&self.weights).ok_or_else(|| {
            PhenologyError::InternalError(format!(
                "model '{}' weight count does not match feature count",
                self.name
            ))
        })?;
        Ok(self.intercept + dot)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_statistical(&self) -> bool {
        true
    }
}

/// Scores the heuristic baseline feature. Used when no model is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedScorer;

impl RuleBasedScorer {
    pub const NAME: &'static str = "rule-based";
}

impl IScorer for RuleBasedScorer {
    fn score(&self, features: &FeatureVector) -> PhenologyResult<f64> {
        Ok(features.heuristic_days())
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_statistical(&self) -> bool {
        false
    }
}
