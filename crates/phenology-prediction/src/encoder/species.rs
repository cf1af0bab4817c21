//! Species and genus parameter tables.

use phenology_core::constants::{DEFAULT_BASE_DAYS, DEFAULT_CLIMATE_MULTIPLIER};
use serde::{Deserialize, Serialize};

/// Baseline maturation parameters for one lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesParams {
    /// Table key matched against the normalized text.
    pub key: &'static str,
    pub base_days: u32,
    pub climate_multiplier: f64,
    /// Climate band the taxon does best in.
    pub preferred_climate: &'static str,
}

/// Which table produced the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesMatch {
    Species,
    Genus,
    Default,
}

impl SpeciesMatch {
    /// Label recorded in `factors_considered`.
    pub fn factor(self) -> &'static str {
        match self {
            Self::Species => "species",
            Self::Genus => "genus",
            Self::Default => "species_default",
        }
    }
}

const fn entry(
    key: &'static str,
    base_days: u32,
    climate_multiplier: f64,
    preferred_climate: &'static str,
) -> SpeciesParams {
    SpeciesParams {
        key,
        base_days,
        climate_multiplier,
        preferred_climate,
    }
}

pub const SPECIES_TABLE: &[SpeciesParams] = &[
    entry("cattleya", 120, 1.2, "warm"),
    entry("phalaenopsis", 90, 1.1, "temperate"),
];

pub const GENUS_TABLE: &[SpeciesParams] = &[
    entry("orchidaceae", 100, 1.1, "temperate"),
    entry("phragmipedium", 120, 1.15, "temperate"),
    entry("lepanthes", 140, 1.2, "cool"),
    entry("cattleya", 120, 1.2, "warm"),
    entry("phalaenopsis", 90, 1.1, "temperate"),
];

pub const DEFAULT_SPECIES: SpeciesParams = entry(
    "default",
    DEFAULT_BASE_DAYS,
    DEFAULT_CLIMATE_MULTIPLIER,
    "temperate",
);

/// Result of resolving species/genus text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesLookup {
    pub params: SpeciesParams,
    pub matched: SpeciesMatch,
    /// 1-based species table position, 0 when unmatched.
    pub species_id: u32,
    /// 1-based genus table position, 0 when unmatched.
    pub genus_id: u32,
}

fn find(table: &[SpeciesParams], text: Option<&str>) -> Option<(usize, SpeciesParams)> {
    let text = text?;
    table
        .iter()
        .enumerate()
        .find(|(_, e)| text.contains(e.key))
        .map(|(i, e)| (i, *e))
}

/// Resolve normalized (trimmed, lowercased) species and genus text.
///
/// Species table against the species text wins, then the genus table
/// against the genus text, then the genus table against the species text
/// (binomials start with the genus), then the default entry.
pub fn lookup(species: Option<&str>, genus: Option<&str>) -> SpeciesLookup {
    let by_species = find(SPECIES_TABLE, species);
    let by_genus = find(GENUS_TABLE, genus).or_else(|| find(GENUS_TABLE, species));

    let species_id = by_species.map_or(0, |(i, _)| i as u32 + 1);
    let genus_id = by_genus.map_or(0, |(i, _)| i as u32 + 1);

    let (params, matched) = match (by_species, by_genus) {
        (Some((_, p)), _) => (p, SpeciesMatch::Species),
        (None, Some((_, p))) => (p, SpeciesMatch::Genus),
        (None, None) => (DEFAULT_SPECIES, SpeciesMatch::Default),
    };

    SpeciesLookup {
        params,
        matched,
        species_id,
        genus_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_table_wins_over_genus() {
        let hit = lookup(Some("phalaenopsis amabilis"), Some("lepanthes"));
        assert_eq!(hit.matched, SpeciesMatch::Species);
        assert_eq!(hit.params.base_days, 90);
        assert_eq!(hit.genus_id, 3);
    }

    #[test]
    fn genus_used_when_species_unknown() {
        let hit = lookup(Some("unknown"), Some("phragmipedium"));
        assert_eq!(hit.matched, SpeciesMatch::Genus);
        assert_eq!(hit.params.base_days, 120);
        assert_eq!(hit.params.climate_multiplier, 1.15);
        assert_eq!(hit.species_id, 0);
    }

    #[test]
    fn genus_table_checks_binomial_species() {
        let hit = lookup(Some("lepanthes telipogoniflora"), None);
        assert_eq!(hit.matched, SpeciesMatch::Genus);
        assert_eq!(hit.params.base_days, 140);
    }

    #[test]
    fn unmatched_falls_back_to_default() {
        let hit = lookup(Some("dracula vampira"), None);
        assert_eq!(hit.matched, SpeciesMatch::Default);
        assert_eq!(hit.params.base_days, 60);
        assert_eq!(hit.params.climate_multiplier, 1.0);
        assert_eq!(hit.matched.factor(), "species_default");
    }
}
