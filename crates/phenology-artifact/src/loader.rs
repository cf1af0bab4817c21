//! ArtifactLoader: walks the fallback chain and owns the shared artifact slot.

use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use phenology_core::config::ArtifactConfig;
use phenology_core::errors::{PhenologyError, PhenologyResult};
use phenology_core::models::{ArtifactInfo, ArtifactTier, DegradationEvent};
use phenology_core::traits::IArtifactStorage;
use phenology_observability::artifact_span;
use tracing::{debug, error, info, warn};

use crate::artifact::ScoringArtifact;
use crate::storage::FsArtifactStorage;
use crate::strategies::{
    BinaryArtifactStrategy, CompatArtifactStrategy, LoadStrategy, RuleBasedStrategy,
};

const COMPONENT: &str = "artifact_loader";

/// Loads the scoring artifact once and hands out shared references.
///
/// `load` is idempotent and safe to call from many threads. Concurrent first
/// loads may each walk the chain, but only the first to publish wins the
/// slot; the others discard their copy and return the winner.
pub struct ArtifactLoader {
    strategies: Vec<Box<dyn LoadStrategy>>,
    storage: Arc<dyn IArtifactStorage>,
    slot: RwLock<Option<Arc<ScoringArtifact>>>,
    /// Fallbacks taken since the last drain.
    events: Mutex<Vec<DegradationEvent>>,
}

impl ArtifactLoader {
    /// Create a loader with an empty chain over the given storage.
    pub fn new(storage: Arc<dyn IArtifactStorage>) -> Self {
        Self {
            strategies: Vec::new(),
            storage,
            slot: RwLock::new(None),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Standard three-tier chain reading from the local filesystem.
    pub fn from_config(config: &ArtifactConfig) -> Self {
        Self::with_storage(config, Arc::new(FsArtifactStorage))
    }

    /// Standard three-tier chain over caller-supplied storage.
    pub fn with_storage(config: &ArtifactConfig, storage: Arc<dyn IArtifactStorage>) -> Self {
        let mut loader = Self::new(storage);
        loader.push(Box::new(BinaryArtifactStrategy::new(
            &config.primary_path,
            &config.primary_extension,
        )));
        loader.push(Box::new(CompatArtifactStrategy::new(
            &config.compat_path,
            &config.compat_extension,
        )));
        loader.push(Box::new(RuleBasedStrategy));
        loader
    }

    /// Add a strategy to the end of the chain.
    pub fn push(&mut self, strategy: Box<dyn LoadStrategy>) {
        self.strategies.push(strategy);
    }

    /// Return the cached artifact, loading it on first use.
    pub fn load(&self) -> PhenologyResult<Arc<ScoringArtifact>> {
        if let Some(artifact) = self.cached()? {
            return Ok(artifact);
        }

        let loaded = Arc::new(self.walk_chain()?);

        let mut slot = self.slot.write().map_err(|e| poisoned(&e))?;
        match slot.as_ref() {
            Some(winner) => {
                debug!("concurrent artifact load lost the race, discarding copy");
                Ok(Arc::clone(winner))
            }
            None => {
                info!(
                    tier = ?loaded.tier(),
                    name = loaded.name(),
                    "scoring artifact cached"
                );
                *slot = Some(Arc::clone(&loaded));
                Ok(loaded)
            }
        }
    }

    /// The cached artifact, without loading.
    pub fn cached(&self) -> PhenologyResult<Option<Arc<ScoringArtifact>>> {
        let slot = self.slot.read().map_err(|e| poisoned(&e))?;
        Ok(slot.clone())
    }

    /// Empty the slot so the next `load` re-reads storage.
    pub fn clear(&self) {
        match self.slot.write() {
            Ok(mut slot) => *slot = None,
            Err(poison) => *poison.into_inner() = None,
        }
    }

    /// Describe the active artifact, loading it if needed.
    pub fn info(&self) -> PhenologyResult<ArtifactInfo> {
        Ok(self.load()?.info())
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poison) => std::mem::take(&mut *poison.into_inner()),
        }
    }

    /// Number of strategies in the chain.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn walk_chain(&self) -> PhenologyResult<ScoringArtifact> {
        let span = artifact_span!(self.strategies.len());
        let _guard = span.enter();
        let mut failures: Vec<(&str, PhenologyError)> = Vec::new();

        for strategy in &self.strategies {
            match strategy.load(self.storage.as_ref()) {
                Ok(artifact) => {
                    if !failures.is_empty() {
                        self.record_fallback(strategy.name(), &failures);
                    }
                    if strategy.tier() == ArtifactTier::RuleBased {
                        warn!("no statistical model available, using rule-based scoring");
                    }
                    return Ok(artifact);
                }
                Err(e) => {
                    warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "artifact tier failed, trying next in chain"
                    );
                    failures.push((strategy.name(), e));
                }
            }
        }

        let reason = match failures.last() {
            Some((_, e)) => e.to_string(),
            None => "no load strategies configured".to_string(),
        };
        error!(%reason, "every artifact tier failed");
        Err(PhenologyError::ArtifactCorrupt {
            path: "all tiers".to_string(),
            reason,
        })
    }

    fn record_fallback(&self, fallback: &str, failures: &[(&str, PhenologyError)]) {
        let failure = failures
            .iter()
            .map(|(name, e)| format!("{name} unavailable: {e}"))
            .collect::<Vec<_>>()
            .join("; ");
        let event = DegradationEvent {
            component: COMPONENT.to_string(),
            failure,
            fallback_used: fallback.to_string(),
            timestamp: Utc::now(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poison) => poison.into_inner().push(event),
        }
    }
}

fn poisoned<T>(e: &std::sync::PoisonError<T>) -> PhenologyError {
    error!(error = %e, "artifact slot lock poisoned");
    PhenologyError::InternalError(format!("artifact slot lock poisoned: {e}"))
}
