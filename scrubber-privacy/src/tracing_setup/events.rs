//! Structured log events for the sanitizer.
//!
//! Each function emits a `tracing` event with structured fields. None of them
//! take matched text: logs carry categories and counts, never the PII.

use scrubber_core::SanitizationEvent;

/// Log the end of a sanitize call.
pub fn sanitization_completed(event: &SanitizationEvent) {
    tracing::info!(
        event = "sanitization_completed",
        event_id = %event.id,
        original_length = event.original_length,
        sanitized_length = event.sanitized_length,
        pii_detected = event.pii_detected,
        pii_types = ?event.pii_types,
        risk_classes = ?event.risk_classes,
        "sanitization completed"
    );
}

/// Log a detection pass.
pub fn detection_completed(text_length: usize, detections: usize) {
    tracing::debug!(
        event = "detection_completed",
        text_length = text_length,
        detections = detections,
        "detection completed"
    );
}

/// Log a category registration or overwrite.
pub fn pattern_added(category_id: &str, risk_class: &str, replaced: bool) {
    tracing::info!(
        event = "pattern_added",
        category_id = %category_id,
        risk_class = %risk_class,
        replaced = replaced,
        "pattern added"
    );
}

/// Log a category removal.
pub fn pattern_removed(category_id: &str) {
    tracing::info!(
        event = "pattern_removed",
        category_id = %category_id,
        "pattern removed"
    );
}

/// Log an attempt to remove a category that is not registered.
pub fn pattern_missing(category_id: &str) {
    tracing::warn!(
        event = "pattern_missing",
        category_id = %category_id,
        "pattern not found"
    );
}

/// Log a matcher that failed and was skipped for the pass.
pub fn pattern_failed(category_id: &str, matcher: &str, error: &str) {
    tracing::warn!(
        event = "pattern_failed",
        category_id = %category_id,
        matcher = %matcher,
        error = %error,
        "pattern skipped"
    );
}

/// Log a reset of the audit log and replacement store.
pub fn logs_cleared(events: usize, replacements: usize) {
    tracing::info!(
        event = "logs_cleared",
        events = events,
        replacements = replacements,
        "sanitization logs cleared"
    );
}

/// Log a gate pass-through while sanitization is switched off.
pub fn gate_bypassed(kind: &str) {
    tracing::debug!(
        event = "gate_bypassed",
        kind = %kind,
        "sanitization disabled, content passed through"
    );
}
