use std::fmt::Debug;
use std::ops::Range;

use crate::errors::ScrubberResult;

/// Finds the spans of one PII category in a piece of text.
///
/// The built-in categories are regex-backed. A category can be swapped for a
/// different detector (an NER model for names, say) by implementing this.
pub trait IPiiMatcher: Send + Sync + Debug {
    /// Non-overlapping byte ranges of every match, left to right.
    fn find_spans(&self, text: &str) -> ScrubberResult<Vec<Range<usize>>>;

    /// Human-readable description of the rule, for logs.
    fn describe(&self) -> String;
}
