use chrono::NaiveDate;
use phenology_core::dates::parse_date;
use phenology_core::models::{normalize_text, PredictionQuality, PredictionStage};
use proptest::prelude::*;

fn stage() -> impl Strategy<Value = PredictionStage> {
    prop_oneof![
        Just(PredictionStage::Initial),
        Just(PredictionStage::BasicWithDate),
        Just(PredictionStage::Refined),
        Just(PredictionStage::Validated),
    ]
}

proptest! {
    #[test]
    fn formatted_dates_parse_back(days in 0i64..50_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        let text = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_date(&text).unwrap(), date);
    }

    #[test]
    fn slash_dates_are_rejected(d in 1u32..=28, m in 1u32..=12, y in 1900i32..2100) {
        let text = format!("{d:02}/{m:02}/{y}");
        prop_assert!(parse_date(&text).is_err());
    }

    #[test]
    fn normalize_text_is_idempotent(s in ".{0,40}") {
        let once = normalize_text(Some(&s));
        let twice = normalize_text(once.as_deref());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn validated_never_transitions(next in stage()) {
        prop_assert!(!PredictionStage::Validated.can_transition_to(next));
    }

    #[test]
    fn quality_is_monotonic_in_accuracy(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(PredictionQuality::from_accuracy(lo) <= PredictionQuality::from_accuracy(hi));
    }
}
