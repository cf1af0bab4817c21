//! Location vocabulary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCode {
    Lab,
    #[default]
    Greenhouse,
    Nursery,
    Outdoor,
    Field,
}

const SYNONYMS: &[(&str, LocationCode)] = &[
    ("laboratorio", LocationCode::Lab),
    ("invernadero", LocationCode::Greenhouse),
    ("vivero", LocationCode::Nursery),
    ("exterior", LocationCode::Outdoor),
    ("campo", LocationCode::Field),
];

impl LocationCode {
    pub const ALL: [LocationCode; 5] = [
        Self::Lab,
        Self::Greenhouse,
        Self::Nursery,
        Self::Outdoor,
        Self::Field,
    ];

    /// Resolve a normalized code or synonym. Unknown and absent input map to greenhouse.
    pub fn resolve(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        if let Some(code) = Self::ALL.iter().find(|c| c.code() == text) {
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
            Self::Lab => "lab",
            Self::Greenhouse => "greenhouse",
            Self::Nursery => "nursery",
            Self::Outdoor => "outdoor",
            Self::Field => "field",
        }
    }

    /// Feature id.
    pub fn id(self) -> u32 {
        match self {
            Self::Lab => 0,
            Self::Greenhouse => 1,
            Self::Nursery => 2,
            Self::Outdoor => 3,
            Self::Field => 4,
        }
    }
}
