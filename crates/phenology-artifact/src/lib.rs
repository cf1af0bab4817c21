//! # phenology-artifact
//!
//! Loads the scoring artifact used to turn encoded features into a day
//! estimate, degrading gracefully when the model is missing or unreadable.
//!
//! ## Fallback chain
//!
//! | Tier | Source | Format |
//! |------|--------|--------|
//! | Primary | `primary_path` | `PHNM` marker + version byte + JSON linear model |
//! | Compat | `compat_path` | plain JSON linear model |
//! | Rule-based | built in | heuristic baseline, always succeeds |
//!
//! The first tier that loads wins and is kept in a single shared slot until
//! explicitly cleared.

pub mod artifact;
pub mod loader;
pub mod storage;
pub mod strategies;

pub use artifact::{LinearModel, RuleBasedScorer, ScoringArtifact};
pub use loader::ArtifactLoader;
pub use storage::FsArtifactStorage;
pub use strategies::{BinaryArtifactStrategy, CompatArtifactStrategy, LoadStrategy, RuleBasedStrategy};
