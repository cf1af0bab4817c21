//! Coarse climate vocabulary.

use serde::{Deserialize, Serialize};

/// Fixed climate codes used on maturation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClimateCode {
    /// Intermediate. Neutral.
    #[default]
    I,
    /// Intermediate-Warm.
    IW,
    /// Intermediate-Cool.
    IC,
    /// Cold.
    W,
    /// Warm.
    C,
}

/// Legacy free-text synonyms, checked in order by substring.
/// Compound phrases come first so "intermedio frio" never reads as "frio".
const SYNONYMS: &[(&str, ClimateCode)] = &[
    ("intermedio calido", ClimateCode::IW),
    ("intermedio cálido", ClimateCode::IW),
    ("intermedio caliente", ClimateCode::IW),
    ("intermedio frio", ClimateCode::IC),
    ("intermedio frío", ClimateCode::IC),
    ("frio", ClimateCode::W),
    ("frío", ClimateCode::W),
    ("calido", ClimateCode::C),
    ("cálido", ClimateCode::C),
    ("caliente", ClimateCode::C),
    ("templado", ClimateCode::I),
    ("intermedio", ClimateCode::I),
];

impl ClimateCode {
    pub const ALL: [ClimateCode; 5] = [Self::I, Self::IW, Self::IC, Self::W, Self::C];

    /// Resolve a normalized code or synonym. Unknown and absent input map to `I`.
    pub fn resolve(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        if let Some(code) = Self::ALL
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(text))
        {
            return *code;
        }
        SYNONYMS
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, code)| *code)
            .unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::IW => "IW",
            Self::IC => "IC",
            Self::W => "W",
            Self::C => "C",
        }
    }

    /// `climate_adjustment_basic` applied at every stage.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::I => 1.0,
            Self::IW => 1.1,
            Self::IC => 0.9,
            Self::W => 1.2,
            Self::C => 0.8,
        }
    }

    /// Feature id.
    pub fn id(self) -> u32 {
        match self {
            Self::I => 0,
            Self::IW => 1,
            Self::IC => 2,
            Self::W => 3,
            Self::C => 4,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::I => "Intermediate: optimal conditions",
            Self::IW => "Intermediate-warm: good development",
            Self::IC => "Intermediate-cool: moderate development",
            Self::W => "Cold: slower but stable development",
            Self::C => "Warm: favours fast development",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_codes_resolve_case_insensitively() {
        assert_eq!(ClimateCode::resolve(Some("iw")), ClimateCode::IW);
        assert_eq!(ClimateCode::resolve(Some("C")), ClimateCode::C);
    }

    #[test]
    fn synonyms_prefer_compound_phrases() {
        assert_eq!(ClimateCode::resolve(Some("intermedio frio")), ClimateCode::IC);
        assert_eq!(ClimateCode::resolve(Some("clima frío")), ClimateCode::W);
        assert_eq!(ClimateCode::resolve(Some("muy caliente")), ClimateCode::C);
        assert_eq!(ClimateCode::resolve(Some("templado")), ClimateCode::I);
    }

    #[test]
    fn unknown_and_absent_are_intermediate() {
        assert_eq!(ClimateCode::resolve(Some("tropical")), ClimateCode::I);
        assert_eq!(ClimateCode::resolve(None), ClimateCode::I);
        assert_eq!(ClimateCode::I.multiplier(), 1.0);
    }

    #[test]
    fn every_code_is_described() {
        for code in ClimateCode::ALL {
            assert_eq!(ClimateCode::resolve(Some(code.code())), code);
            assert!(!code.description().is_empty());
        }
    }
}
