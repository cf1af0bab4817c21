use std::path::PathBuf;

use chrono::NaiveDate;
use phenology_core::config::ArtifactConfig;
use phenology_core::models::{DetailedClimate, PredictionRequest};
use phenology_core::PhenologyConfig;
use phenology_prediction::{fingerprint, FeatureEncoder, PredictionEngine};
use proptest::prelude::*;

fn engine() -> PredictionEngine {
    PredictionEngine::new(&PhenologyConfig {
        artifact: ArtifactConfig {
            primary_path: PathBuf::from("/nonexistent/phenology/m.bin"),
            compat_path: PathBuf::from("/nonexistent/phenology/m.json"),
            ..Default::default()
        },
        ..Default::default()
    })
}

fn identity() -> impl Strategy<Value = (Option<String>, Option<String>)> {
    let species = prop::option::of(prop_oneof![
        Just("cattleya".to_string()),
        Just("Phalaenopsis amabilis".to_string()),
        "[a-zA-Z ]{1,20}",
    ]);
    let genus = prop::option::of(prop_oneof![
        Just("Lepanthes".to_string()),
        Just("phragmipedium".to_string()),
        "[a-zA-Z]{1,12}",
    ]);
    (species, genus).prop_filter("needs identity", |(s, g)| {
        s.as_deref().is_some_and(|t| !t.trim().is_empty())
            || g.as_deref().is_some_and(|t| !t.trim().is_empty())
    })
}

fn climate_code() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("I".to_string()),
        Just("iw".to_string()),
        Just("IC".to_string()),
        Just("W".to_string()),
        Just("c".to_string()),
        Just("intermedio frio".to_string()),
        "[a-z]{0,8}",
    ])
}

fn event_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((2000i32..2040, 1u32..=12, 1u32..=28))
        .prop_map(|d| d.and_then(|(y, m, day)| NaiveDate::from_ymd_opt(y, m, day)))
}

fn detailed_climate() -> impl Strategy<Value = Option<DetailedClimate>> {
    prop::option::of(
        (
            prop::option::of(-50.0f64..60.0),
            prop::option::of(0.0f64..100.0),
            prop::option::of(0.0f64..1000.0),
        )
            .prop_map(|(t, h, p)| DetailedClimate {
                avg_temperature: t,
                humidity_pct: h,
                precipitation_mm: p,
            }),
    )
}

fn refinement() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("manual".to_string()),
        Just("Natural".to_string()),
        Just("cross".to_string()),
        Just("hybrid".to_string()),
    ])
}

fn request() -> impl Strategy<Value = PredictionRequest> {
    (
        identity(),
        climate_code(),
        event_date(),
        detailed_climate(),
        refinement(),
    )
        .prop_map(|((species, genus), climate_code, event_date, detailed_climate, refinement_type)| {
            PredictionRequest {
                species,
                genus,
                climate_code,
                location_code: None,
                event_date,
                detailed_climate,
                refinement_type,
            }
        })
}

proptest! {
    #[test]
    fn initial_is_deterministic(req in request()) {
        let engine = engine();
        let first = engine.predict_initial(&req).unwrap();
        engine.clear_cache();
        let second = engine.predict_initial(&req).unwrap();
        prop_assert_eq!(first.estimated_days, second.estimated_days);
        prop_assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn cached_and_recomputed_results_are_identical(req in request()) {
        let engine = engine();
        let first = engine.predict_refined(&req).unwrap();
        let cached = engine.predict_refined(&req).unwrap();
        prop_assert_eq!(&first, &cached);
        engine.clear_cache();
        let recomputed = engine.predict_refined(&req).unwrap();
        prop_assert_eq!(&first, &recomputed);
    }

    #[test]
    fn adding_fields_never_lowers_confidence(req in request()) {
        let engine = engine();
        let without_date = PredictionRequest { event_date: None, ..req.clone() };
        let without_climate = PredictionRequest { detailed_climate: None, ..req.clone() };
        let without_refinement = PredictionRequest { refinement_type: None, ..req.clone() };

        let full = engine.predict_refined(&req).unwrap();
        for partial in [without_date, without_climate, without_refinement] {
            let fewer = engine.predict_refined(&partial).unwrap();
            prop_assert!(full.confidence >= fewer.confidence);
        }
        let initial = engine.predict_initial(&req).unwrap();
        prop_assert!(full.confidence >= initial.confidence);
        prop_assert!(full.confidence <= 95);
        prop_assert!(full.estimated_days >= 1);
    }

    #[test]
    fn estimated_date_follows_final_days(req in request()) {
        let result = engine().predict_refined(&req).unwrap();
        match req.event_date {
            Some(event) => {
                let expected = event + chrono::Duration::days(i64::from(result.estimated_days));
                prop_assert_eq!(result.estimated_date, Some(expected));
            }
            None => prop_assert!(result.estimated_date.is_none()),
        }
    }

    #[test]
    fn fingerprint_ignores_case_and_whitespace(req in request()) {
        let encoder = FeatureEncoder::new();
        let shouted = PredictionRequest {
            species: req.species.as_ref().map(|s| format!("  {} ", s.to_uppercase())),
            genus: req.genus.as_ref().map(|g| g.to_uppercase()),
            ..req.clone()
        };
        let a = encoder.encode(&req).unwrap();
        let b = encoder.encode(&shouted).unwrap();
        prop_assert_eq!(fingerprint(&a.normalized), fingerprint(&b.normalized));
        prop_assert_eq!(a.features, b.features);
    }
}
