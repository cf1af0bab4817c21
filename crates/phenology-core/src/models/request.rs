use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inputs supplied for a prediction at a point in time.
///
/// Categorical fields are free text; the feature encoder resolves them
/// against its lookup tables. Every field is optional, but at least one of
/// `species` / `genus` must be present for a prediction to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    /// Climate code (`I`, `IW`, `IC`, `W`, `C`) or a legacy synonym.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate_code: Option<String>,
    /// Location code (`lab`, `greenhouse`, `nursery`, `outdoor`, `field`) or a synonym.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_code: Option<String>,
    /// Anchor event (pollination or sowing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_climate: Option<DetailedClimate>,
    /// `manual` / `artificial`, `natural`, or `cross`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement_type: Option<String>,
}

impl PredictionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_genus(mut self, genus: impl Into<String>) -> Self {
        self.genus = Some(genus.into());
        self
    }

    pub fn with_climate(mut self, code: impl Into<String>) -> Self {
        self.climate_code = Some(code.into());
        self
    }

    pub fn with_location(mut self, code: impl Into<String>) -> Self {
        self.location_code = Some(code.into());
        self
    }

    pub fn with_event_date(mut self, date: NaiveDate) -> Self {
        self.event_date = Some(date);
        self
    }

    pub fn with_detailed_climate(mut self, climate: DetailedClimate) -> Self {
        self.detailed_climate = Some(climate);
        self
    }

    pub fn with_refinement(mut self, refinement: impl Into<String>) -> Self {
        self.refinement_type = Some(refinement.into());
        self
    }

    /// Whether species or genus carries any non-blank text.
    pub fn has_identity(&self) -> bool {
        normalize_text(self.species.as_deref()).is_some()
            || normalize_text(self.genus.as_deref()).is_some()
    }

    /// The identity + coarse climate + location subset used by the initial stage.
    pub fn initial_view(&self) -> Self {
        Self {
            species: self.species.clone(),
            genus: self.genus.clone(),
            climate_code: self.climate_code.clone(),
            location_code: self.location_code.clone(),
            event_date: None,
            detailed_climate: None,
            refinement_type: None,
        }
    }

    /// Fill refinement fields from `additions`. Values present in `additions`
    /// win, absent ones keep the prior value. Detailed climate merges per
    /// measurement and an empty block is ignored. Identity, climate code, and
    /// location are untouched.
    pub fn merged_with(&self, additions: &Refinements) -> Self {
        let mut merged = self.clone();
        if additions.event_date.is_some() {
            merged.event_date = additions.event_date;
        }
        if let Some(added) = additions.detailed_climate.as_ref().filter(|c| !c.is_empty()) {
            merged.detailed_climate = Some(match &self.detailed_climate {
                Some(prior) => prior.overlaid_with(added),
                None => added.clone(),
            });
        }
        if additions.refinement_type.is_some() {
            merged.refinement_type = additions.refinement_type.clone();
        }
        merged
    }
}

/// Fields that can arrive after an initial prediction was issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Refinements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_climate: Option<DetailedClimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement_type: Option<String>,
}

/// Measured environmental conditions over the maturation period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetailedClimate {
    /// Average temperature in °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_temperature: Option<f64>,
    /// Relative humidity, 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    /// Precipitation in millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_mm: Option<f64>,
}

impl DetailedClimate {
    /// A block with no measurements carries no information.
    pub fn is_empty(&self) -> bool {
        self.avg_temperature.is_none()
            && self.humidity_pct.is_none()
            && self.precipitation_mm.is_none()
    }

    /// Measurements from `other` where present, otherwise from `self`.
    pub fn overlaid_with(&self, other: &DetailedClimate) -> Self {
        Self {
            avg_temperature: other.avg_temperature.or(self.avg_temperature),
            humidity_pct: other.humidity_pct.or(self.humidity_pct),
            precipitation_mm: other.precipitation_mm.or(self.precipitation_mm),
        }
    }
}

/// Case-fold and trim free text. Blank input normalizes to `None`.
pub fn normalize_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
