mod artifact_storage;
mod prediction_cache;
mod scorer;

pub use artifact_storage::IArtifactStorage;
pub use prediction_cache::IPredictionCache;
pub use scorer::IScorer;
