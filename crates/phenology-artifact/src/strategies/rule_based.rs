//! Last tier: the built-in heuristic stub. Never fails.

use phenology_core::errors::PhenologyResult;
use phenology_core::models::ArtifactTier;
use phenology_core::traits::IArtifactStorage;

use super::LoadStrategy;
use crate::artifact::{RuleBasedScorer, ScoringArtifact};

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedStrategy;

impl LoadStrategy for RuleBasedStrategy {
    fn name(&self) -> &str {
        RuleBasedScorer::NAME
    }

    fn tier(&self) -> ArtifactTier {
        ArtifactTier::RuleBased
    }

    fn load(&self, _storage: &dyn IArtifactStorage) -> PhenologyResult<ScoringArtifact> {
        Ok(ScoringArtifact::new(
            ArtifactTier::RuleBased,
            None,
            Box::new(RuleBasedScorer),
        ))
    }
}
