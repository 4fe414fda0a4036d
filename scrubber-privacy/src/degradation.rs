//! Graceful degradation for the privacy engine.
//!
//! A matcher that cannot run (bad custom regex, failing custom detector) is
//! skipped for the pass. The remaining categories still run and the gap is
//! recorded here.

use crate::tracing_setup::events;

/// A category whose matcher failed during one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFailure {
    pub category_id: String,
    pub matcher: String,
    pub error: String,
}

/// Accumulates matcher failures during a sanitization or detection pass.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure and log it. The caller moves on to the next category.
    pub fn record_failure(&mut self, category_id: &str, matcher: &str, error: &str) {
        events::pattern_failed(category_id, matcher, error);
        self.failures.push(PatternFailure {
            category_id: category_id.to_string(),
            matcher: matcher.to_string(),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Categories that failed, in the order they failed.
    pub fn failed_categories(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.category_id.as_str()).collect()
    }
}
