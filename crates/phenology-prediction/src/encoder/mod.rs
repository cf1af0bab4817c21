//! Feature encoder: normalizes a request and maps it onto the fixed feature vector.

pub mod climate;
pub mod location;
pub mod refinement;
pub mod species;

pub use climate::ClimateCode;
pub use location::LocationCode;
pub use refinement::RefinementType;
pub use species::{SpeciesLookup, SpeciesMatch, SpeciesParams};

use phenology_core::errors::PhenologyResult;
use phenology_core::models::{normalize_text, FeatureVector, PredictionRequest, FEATURE_COUNT};

use crate::adjustments::check_detailed_climate;

/// A request after normalization and table lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRequest {
    /// Case-folded text, canonical codes, empty blocks dropped.
    pub normalized: PredictionRequest,
    pub species: SpeciesLookup,
    pub climate: ClimateCode,
    pub location: LocationCode,
    pub refinement: Option<RefinementType>,
    pub features: FeatureVector,
}

impl EncodedRequest {
    /// `base_days × species multiplier × climate adjustment`, unrounded.
    pub fn heuristic_days(&self) -> f64 {
        self.features.heuristic_days()
    }
}

/// Stateless encoder over the built-in lookup tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Normalize and encode. Identical normalized input always yields an
    /// identical result.
    ///
    /// Fails only on an unrecognized refinement type or out-of-range
    /// climate measurements; missing fields fall back to table defaults.
    pub fn encode(&self, request: &PredictionRequest) -> PhenologyResult<EncodedRequest> {
        let species_text = normalize_text(request.species.as_deref());
        let genus_text = normalize_text(request.genus.as_deref());
        let climate_text = normalize_text(request.climate_code.as_deref());
        let location_text = normalize_text(request.location_code.as_deref());

        let refinement = normalize_text(request.refinement_type.as_deref())
            .map(|t| RefinementType::parse(&t))
            .transpose()?;

        let detailed_climate = match &request.detailed_climate {
            Some(c) if !c.is_empty() => {
                check_detailed_climate(c)?;
                Some(c.clone())
            }
            _ => None,
        };

        let lookup = species::lookup(species_text.as_deref(), genus_text.as_deref());
        let climate = ClimateCode::resolve(climate_text.as_deref());
        let location = LocationCode::resolve(location_text.as_deref());

        let base_days = f64::from(lookup.params.base_days);
        let species_multiplier = lookup.params.climate_multiplier;
        let climate_adjustment = climate.multiplier();

        let mut values = [0.0; FEATURE_COUNT];
        values[FeatureVector::SPECIES_ID] = f64::from(lookup.species_id);
        values[FeatureVector::GENUS_ID] = f64::from(lookup.genus_id);
        values[FeatureVector::CLIMATE_ID] = f64::from(climate.id());
        values[FeatureVector::LOCATION_ID] = f64::from(location.id());
        values[FeatureVector::BASE_DAYS] = base_days;
        values[FeatureVector::SPECIES_CLIMATE_MULTIPLIER] = species_multiplier;
        values[FeatureVector::CLIMATE_ADJUSTMENT] = climate_adjustment;
        values[FeatureVector::HEURISTIC_DAYS] = base_days * species_multiplier * climate_adjustment;

        let normalized = PredictionRequest {
            species: species_text,
            genus: genus_text,
            climate_code: climate_text.map(|_| climate.code().to_string()),
            location_code: location_text.map(|_| location.code().to_string()),
            event_date: request.event_date,
            detailed_climate,
            refinement_type: refinement.map(|r| r.code().to_string()),
        };

        Ok(EncodedRequest {
            normalized,
            species: lookup,
            climate,
            location,
            refinement,
            features: FeatureVector::new(values),
        })
    }

    /// Baseline parameters for raw species/genus text.
    pub fn species_defaults(&self, species: Option<&str>, genus: Option<&str>) -> SpeciesParams {
        let species = normalize_text(species);
        let genus = normalize_text(genus);
        species::lookup(species.as_deref(), genus.as_deref()).params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phenology_core::models::DetailedClimate;

    #[test]
    fn encode_normalizes_codes() {
        let request = PredictionRequest::new()
            .with_species("  Cattleya Trianae ")
            .with_climate("iw")
            .with_location("Invernadero 2")
            .with_refinement("Artificial");
        let encoded = FeatureEncoder::new().encode(&request).unwrap();

        assert_eq!(encoded.normalized.species.as_deref(), Some("cattleya trianae"));
        assert_eq!(encoded.normalized.climate_code.as_deref(), Some("IW"));
        assert_eq!(encoded.normalized.location_code.as_deref(), Some("greenhouse"));
        assert_eq!(encoded.normalized.refinement_type.as_deref(), Some("manual"));
        assert!((encoded.heuristic_days() - 120.0 * 1.2 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn absent_codes_stay_absent_but_use_defaults() {
        let encoded = FeatureEncoder::new()
            .encode(&PredictionRequest::new().with_genus("Lepanthes"))
            .unwrap();
        assert!(encoded.normalized.climate_code.is_none());
        assert_eq!(encoded.climate, ClimateCode::I);
        assert_eq!(encoded.location, LocationCode::Greenhouse);
    }

    #[test]
    fn empty_detailed_climate_is_dropped() {
        let request = PredictionRequest::new()
            .with_species("cattleya")
            .with_detailed_climate(DetailedClimate::default());
        let encoded = FeatureEncoder::new().encode(&request).unwrap();
        assert!(encoded.normalized.detailed_climate.is_none());
    }

    #[test]
    fn case_variants_encode_identically() {
        let encoder = FeatureEncoder::new();
        let a = encoder
            .encode(&PredictionRequest::new().with_species("PHALAENOPSIS").with_climate("c"))
            .unwrap();
        let b = encoder
            .encode(&PredictionRequest::new().with_species("phalaenopsis ").with_climate("C"))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn species_defaults_for_unknown() {
        let params = FeatureEncoder::new().species_defaults(Some("Masdevallia"), None);
        assert_eq!(params.base_days, 60);
        assert_eq!(params.climate_multiplier, 1.0);
    }
}
