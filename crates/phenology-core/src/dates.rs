//! Strict `YYYY-MM-DD` date parsing shared by the engine and the validator.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{PhenologyError, PhenologyResult};

static ISO_DATE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok());

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// Surrounding whitespace is ignored. Anything else (other separators,
/// missing zero padding, impossible days) is `InvalidDate`.
pub fn parse_date(raw: &str) -> PhenologyResult<NaiveDate> {
    let trimmed = raw.trim();
    let pattern = ISO_DATE
        .as_ref()
        .ok_or_else(|| PhenologyError::InternalError("date pattern failed to compile".into()))?;
    if !pattern.is_match(trimmed) {
        return Err(PhenologyError::InvalidDate {
            value: raw.to_string(),
            reason: "expected format YYYY-MM-DD".to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| PhenologyError::InvalidDate {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
