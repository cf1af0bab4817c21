//! Deterministic cache keys for normalized requests.

use std::collections::BTreeMap;

use phenology_core::constants::FINGERPRINT_PREFIX;
use phenology_core::models::PredictionRequest;

/// Hash every non-null field of an already-normalized request.
///
/// Fields are keyed by name and sorted, so the key does not depend on
/// construction order. Floats hash by bit pattern.
pub fn fingerprint(normalized: &PredictionRequest) -> String {
    let mut fields: BTreeMap<&'static str, String> = BTreeMap::new();

    let text = [
        ("species", &normalized.species),
        ("genus", &normalized.genus),
        ("climate_code", &normalized.climate_code),
        ("location_code", &normalized.location_code),
        ("refinement_type", &normalized.refinement_type),
    ];
    for (key, value) in text {
        if let Some(v) = value {
            fields.insert(key, v.clone());
        }
    }

    if let Some(date) = normalized.event_date {
        fields.insert("event_date", date.format("%Y-%m-%d").to_string());
    }

    if let Some(climate) = &normalized.detailed_climate {
        let measurements = [
            ("avg_temperature", climate.avg_temperature),
            ("humidity_pct", climate.humidity_pct),
            ("precipitation_mm", climate.precipitation_mm),
        ];
        for (key, value) in measurements {
            if let Some(v) = value {
                fields.insert(key, format!("{:016x}", v.to_bits()));
            }
        }
    }

    let mut hasher = blake3::Hasher::new();
    for (key, value) in &fields {
        hasher.update(key.as_bytes());
        hasher.update(b"=");
        hasher.update(value.as_bytes());
        hasher.update(b"\n");
    }
    format!("{FINGERPRINT_PREFIX}{}", hasher.finalize().to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn prefixed_hex_key() {
        let key = fingerprint(&PredictionRequest::new().with_species("cattleya"));
        assert!(key.starts_with("prediction_"));
        assert_eq!(key.len(), "prediction_".len() + 64);
    }

    #[test]
    fn builder_order_does_not_matter() {
        let a = PredictionRequest::new().with_species("cattleya").with_climate("IW");
        let b = PredictionRequest::new().with_climate("IW").with_species("cattleya");
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn every_field_contributes() {
        let base = PredictionRequest::new().with_species("cattleya");
        let dated = base
            .clone()
            .with_event_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_ne!(fingerprint(&base), fingerprint(&dated));
        assert_ne!(
            fingerprint(&base),
            fingerprint(&PredictionRequest::new().with_genus("cattleya"))
        );
    }
}
