use std::time::Duration;

use crate::models::PredictionResult;

/// Key-value cache for prediction results, keyed by request fingerprint.
///
/// Supplied by the host application; may be in-process or backed by a
/// shared cache service. Entries past their TTL must read as absent.
pub trait IPredictionCache: Send + Sync {
    fn get(&self, fingerprint: &str) -> Option<PredictionResult>;

    fn put(&self, fingerprint: String, result: PredictionResult, ttl: Duration);

    /// Drop every entry.
    fn clear(&self);
}
