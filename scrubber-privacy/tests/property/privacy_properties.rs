use proptest::prelude::*;
use scrubber_core::traits::ISanitizer;
use scrubber_core::PiiCategory;
use scrubber_privacy::scoring::ConfidenceTable;
use scrubber_privacy::PrivacyEngine;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        ".{0,40}".prop_map(Value::String),
        "[a-z]{3,8}@[a-z]{3,8}\\.com".prop_map(Value::String),
        "[0-9]{3}-[0-9]{3}-[0-9]{4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_shape(p, q))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| same_shape(v, w)))
        }
        (Value::String(_), Value::String(_)) => true,
        (x, y) => x == y,
    }
}

// ── Sanitized output never contains raw PII ───────────────────────────────

proptest! {
    #[test]
    fn sanitized_output_never_contains_raw_email(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}"
    ) {
        let email = format!("{user}@{domain}.com");
        let input = format!("contact: {email}");
        let engine = PrivacyEngine::new();
        let result = engine.sanitize(&input).unwrap();
        prop_assert!(
            !result.text.contains(&email),
            "Raw email found in sanitized output: {}",
            result.text
        );
    }

    #[test]
    fn sanitized_output_never_contains_raw_ssn(
        area in 100u32..999,
        group in 10u32..99,
        serial in 1000u32..9999
    ) {
        let ssn = format!("{area}-{group}-{serial}");
        let engine = PrivacyEngine::new();
        let output = engine.sanitize_text(&format!("ssn {ssn} on file"));
        prop_assert!(!output.contains(&ssn), "Raw SSN in output: {}", output);
    }

    #[test]
    fn sanitized_output_never_contains_raw_ipv4(
        a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255
    ) {
        let ip = format!("{a}.{b}.{c}.{d}");
        let engine = PrivacyEngine::new();
        let output = engine.sanitize_text(&format!("host {ip} is up"));
        prop_assert!(!output.contains(&ip), "Raw IP in output: {}", output);
    }
}

// ── Idempotence ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sanitization_idempotent_with_email(
        user in "[a-z]{3,8}",
        domain in "[a-z]{3,8}"
    ) {
        let input = format!("contact: {user}@{domain}.com");
        let engine = PrivacyEngine::new();
        let first = engine.sanitize(&input).unwrap();
        let second = engine.sanitize(&first.text).unwrap();
        prop_assert_eq!(&first.text, &second.text);
        prop_assert!(second.redactions.is_empty());
    }

    #[test]
    fn replacement_tokens_are_never_redetected(
        parts in prop::collection::vec(
            (0..PiiCategory::ALL.len(), prop::option::of("[0-9a-f]{8}")),
            1..8
        )
    ) {
        let text = parts
            .iter()
            .map(|(index, hash)| {
                let token = PiiCategory::ALL[*index].replacement_token();
                match hash {
                    Some(hash) => format!("{token}_{hash}"),
                    None => token.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let engine = PrivacyEngine::new();
        prop_assert_eq!(engine.sanitize_text(&text), text.clone());
        prop_assert!(engine.detect_pii(&text).is_empty());
    }
}

// ── Structural sanitization preserves shape ───────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sanitize_value_preserves_shape(value in arb_json()) {
        let engine = PrivacyEngine::new();
        let out = engine.sanitize_value(&value);
        prop_assert!(same_shape(&value, &out), "shape changed: {} -> {}", value, out);
    }
}

// ── Detection confidence ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn detections_are_bounded_and_consistent(text in ".{0,120}") {
        let engine = PrivacyEngine::new();
        let table = ConfidenceTable::new();
        for detection in engine.detect_pii(&text) {
            prop_assert!((0.0..=1.0).contains(&detection.confidence));
            prop_assert!(detection.start < detection.end);
            prop_assert!(detection.end <= text.len());
            prop_assert_eq!(&text[detection.start..detection.end], detection.text.as_str());
            prop_assert_eq!(
                detection.confidence,
                table.score(&detection.category_id, &detection.text)
            );
        }
    }

    #[test]
    fn sanitize_never_panics_on_arbitrary_text(text in ".{0,200}") {
        let engine = PrivacyEngine::new();
        let (result, tracker) = engine.sanitize_with_tracking(&text, true);
        prop_assert!(!tracker.has_failures());
        prop_assert_eq!(result.text.is_empty(), text.is_empty());
    }
}
