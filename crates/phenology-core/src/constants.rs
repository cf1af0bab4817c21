/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base days used when neither species nor genus matches the lookup table.
pub const DEFAULT_BASE_DAYS: u32 = 60;

/// Species climate multiplier used for the default entry.
pub const DEFAULT_CLIMATE_MULTIPLIER: f64 = 1.0;

/// Every estimate is at least one day.
pub const MIN_ESTIMATED_DAYS: u32 = 1;

// ── Confidence accumulation ─────────────────────────────────────────────

/// Species + coarse climate only.
pub const CONFIDENCE_BASE: u8 = 40;
/// Anchor event date supplied.
pub const CONFIDENCE_EVENT_DATE: u8 = 20;
/// Detailed climate measurements supplied.
pub const CONFIDENCE_DETAILED_CLIMATE: u8 = 15;
/// Manual / artificial refinement.
pub const CONFIDENCE_REFINEMENT_MANUAL: u8 = 10;
/// Natural refinement.
pub const CONFIDENCE_REFINEMENT_NATURAL: u8 = 5;
/// Cross refinement.
pub const CONFIDENCE_REFINEMENT_CROSS: u8 = 8;
/// Hard ceiling, applied once after all rules.
pub const CONFIDENCE_CAP: u8 = 95;

/// Confidence at or above this is labelled high.
pub const CONFIDENCE_LEVEL_HIGH: u8 = 85;
/// Confidence at or above this is labelled medium.
pub const CONFIDENCE_LEVEL_MEDIUM: u8 = 70;

// ── Validation ──────────────────────────────────────────────────────────

/// Quality bucket lower bounds on `accuracy_pct`.
pub const QUALITY_EXCELLENT: f64 = 90.0;
pub const QUALITY_GOOD: f64 = 75.0;
pub const QUALITY_ACCEPTABLE: f64 = 60.0;
pub const QUALITY_FAIR: f64 = 40.0;

/// Improvement hint triggers.
pub const HINT_ABSOLUTE_ERROR_DAYS: i64 = 7;
pub const HINT_RELATIVE_ERROR_PCT: f64 = 20.0;
pub const HINT_ACCURACY_PCT: f64 = 60.0;

/// Observed maturation shorter than this is flagged as a data-quality concern.
pub const MIN_PLAUSIBLE_OBSERVED_DAYS: i64 = 7;

// ── Artifact format ─────────────────────────────────────────────────────

/// Marker at the start of every primary-tier artifact.
pub const ARTIFACT_MAGIC: &[u8; 4] = b"PHNM";

/// Binary artifact format version following the marker.
pub const ARTIFACT_FORMAT_VERSION: u8 = 1;

/// Fingerprint prefix for prediction cache keys.
pub const FINGERPRINT_PREFIX: &str = "prediction_";
