//! Confidence scoring for detections.
//!
//! A score depends only on the category and the length of the matched text.

use std::collections::HashMap;

use scrubber_core::constants::{
    DEFAULT_BASE_CONFIDENCE, LONG_MATCH_BONUS, LONG_MATCH_CHARS, SHORT_MATCH_CHARS,
    SHORT_MATCH_PENALTY,
};
use scrubber_core::PiiCategory;

/// Base confidence per category, with configured overrides on top of the
/// built-in table.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceTable {
    overrides: HashMap<String, f64>,
}

impl ConfidenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, f64>) -> Self {
        Self { overrides }
    }

    /// Base confidence before the length adjustment.
    pub fn base_confidence(&self, category_id: &str) -> f64 {
        self.overrides
            .get(category_id)
            .copied()
            .or_else(|| PiiCategory::from_id(category_id).map(|c| c.base_confidence()))
            .unwrap_or(DEFAULT_BASE_CONFIDENCE)
    }

    /// Final confidence for a match of `matched_text` in `category_id`.
    pub fn score(&self, category_id: &str, matched_text: &str) -> f64 {
        adjust_for_length(
            self.base_confidence(category_id),
            matched_text.chars().count(),
        )
    }
}

/// Long matches are more likely real, very short ones less so. Clamped to [0, 1].
pub fn adjust_for_length(base: f64, char_len: usize) -> f64 {
    let mut adjusted = base;
    if char_len > LONG_MATCH_CHARS {
        adjusted += LONG_MATCH_BONUS;
    }
    if char_len < SHORT_MATCH_CHARS {
        adjusted -= SHORT_MATCH_PENALTY;
    }
    adjusted.clamp(0.0, 1.0)
}
