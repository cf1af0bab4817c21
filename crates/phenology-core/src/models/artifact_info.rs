use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which tier of the fallback chain produced the loaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactTier {
    /// Primary binary artifact.
    Primary,
    /// Degraded compatibility artifact.
    Compat,
    /// Built-in rule-based stub; no statistical model available.
    RuleBased,
}

/// Summary of the currently loaded scoring artifact.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArtifactInfo {
    pub tier: ArtifactTier,
    pub name: String,
    /// Source file, absent for the rule-based stub.
    pub path: Option<String>,
    pub feature_count: u32,
    pub statistical: bool,
    #[ts(type = "string")]
    pub loaded_at: DateTime<Utc>,
}
