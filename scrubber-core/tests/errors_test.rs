use scrubber_core::errors::*;

#[test]
fn pattern_error_invalid_pattern_carries_category() {
    let err = PatternError::InvalidPattern {
        category_id: "employee_id".into(),
        reason: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("employee_id"));
    assert!(msg.contains("unclosed group"));
}

#[test]
fn pattern_error_wraps_into_scrubber_error() {
    let err: ScrubberError = PatternError::MatcherFailed {
        category_id: "name".into(),
        reason: "model unavailable".into(),
    }
    .into();
    assert!(err.to_string().starts_with("pattern error:"));
    assert!(err.to_string().contains("model unavailable"));
}

#[test]
fn config_error_invalid_value_carries_field() {
    let err: ScrubberError = ConfigError::InvalidValue {
        field: "privacy.audit_log_capacity".into(),
        reason: "must be at least 1 when set".into(),
    }
    .into();
    assert!(err.to_string().contains("privacy.audit_log_capacity"));
}

#[test]
fn serde_json_error_converts() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ScrubberError = parse_err.into();
    assert!(matches!(err, ScrubberError::SerializationError(_)));
}
