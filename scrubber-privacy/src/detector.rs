//! Non-mutating scan of text against every registered category.

use scrubber_core::Detection;

use crate::degradation::DegradationTracker;
use crate::patterns::{usable_spans, PatternRule};
use crate::scoring::ConfidenceTable;

/// Every match of every rule against the unmodified `text`.
///
/// Rules run in registry order and each sees the original text, so the same
/// substring can be reported under several categories.
pub fn detect(
    rules: &[PatternRule],
    scoring: &ConfidenceTable,
    text: &str,
    tracker: &mut DegradationTracker,
) -> Vec<Detection> {
    let mut detections = Vec::new();
    for rule in rules {
        let spans = match rule.matcher.find_spans(text) {
            Ok(spans) => spans,
            Err(e) => {
                tracker.record_failure(&rule.category_id, &rule.matcher.describe(), &e.to_string());
                continue;
            }
        };
        for span in usable_spans(text, spans) {
            let matched = &text[span.clone()];
            detections.push(Detection {
                category_id: rule.category_id.clone(),
                risk_class: rule.risk_class.clone(),
                text: matched.to_string(),
                start: span.start,
                end: span.end,
                confidence: scoring.score(&rule.category_id, matched),
            });
        }
    }
    detections
}
