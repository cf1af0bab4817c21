use chrono::NaiveDate;
use phenology_core::models::*;

fn sample_result() -> PredictionResult {
    PredictionResult {
        stage: PredictionStage::Refined,
        estimated_days: 137,
        estimated_date: NaiveDate::from_ymd_opt(2024, 5, 17),
        confidence: 70,
        factors_considered: vec![
            "species".into(),
            "climate_basic".into(),
            "refinement_type".into(),
        ],
        inputs_snapshot: PredictionRequest::new()
            .with_species("cattleya")
            .with_climate("I")
            .with_event_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_refinement("manual"),
        scoring_source: ScoringSource::RuleBased,
        model_estimate: 144.0,
        comparison_with_initial: Some(InitialComparison {
            initial_days: 144,
            initial_confidence: 40,
            delta_days: -7,
        }),
    }
}

#[test]
fn prediction_result_survives_json_persistence() {
    // The host stores results verbatim and hands them back for validation.
    let result = sample_result();
    let json = serde_json::to_string(&result).unwrap();
    let restored: PredictionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
    assert_eq!(restored.event_date(), NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn request_omits_absent_fields_when_serialized() {
    let req = PredictionRequest::new().with_species("cattleya");
    let json = serde_json::to_value(&req).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(obj["species"], "cattleya");
}

#[test]
fn request_deserializes_from_sparse_json() {
    let req: PredictionRequest =
        serde_json::from_str(r#"{"genus":"Lepanthes","event_date":"2024-02-10"}"#).unwrap();
    assert_eq!(req.genus.as_deref(), Some("Lepanthes"));
    assert_eq!(req.event_date, NaiveDate::from_ymd_opt(2024, 2, 10));
    assert!(req.species.is_none());
}

#[test]
fn confidence_levels() {
    let mut result = sample_result();
    result.confidence = 95;
    assert_eq!(result.confidence_level(), ConfidenceLevel::High);
    result.confidence = 85;
    assert_eq!(result.confidence_level(), ConfidenceLevel::High);
    result.confidence = 70;
    assert_eq!(result.confidence_level(), ConfidenceLevel::Medium);
    result.confidence = 60;
    assert_eq!(result.confidence_level(), ConfidenceLevel::Low);
}

#[test]
fn empty_detailed_climate_is_detected() {
    assert!(DetailedClimate::default().is_empty());
    let climate = DetailedClimate {
        humidity_pct: Some(85.0),
        ..Default::default()
    };
    assert!(!climate.is_empty());
}

#[test]
fn recalibration_needed_for_fair_and_poor() {
    let mut record = ValidationRecord {
        stage: PredictionStage::Validated,
        prior_stage: PredictionStage::Refined,
        event_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        estimated_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        observed_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        estimated_days: 100,
        observed_days: 100,
        absolute_error_days: 0,
        relative_error_pct: 0.0,
        accuracy_pct: 100.0,
        quality: PredictionQuality::Excellent,
        bias_direction: BiasDirection::Exact,
        suggested_correction_factor: 1.0,
        improvement_hints: vec![],
        data_quality_hints: vec![],
    };
    assert!(!record.needs_recalibration());
    record.quality = PredictionQuality::Fair;
    assert!(record.needs_recalibration());
    record.quality = PredictionQuality::Poor;
    assert!(record.needs_recalibration());
}
