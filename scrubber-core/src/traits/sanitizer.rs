use crate::errors::ScrubberResult;
use serde::{Deserialize, Serialize};

/// Result of sanitization with metadata about what was redacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedText {
    pub text: String,
    pub redactions: Vec<Redaction>,
}

/// A single replacement applied during sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redaction {
    pub category_id: String,
    pub risk_class: String,
    /// What was written in place of the match.
    pub replacement: String,
    /// Content hash of the original literal.
    pub hash: String,
    /// Length of the original literal, in characters.
    pub original_length: usize,
    /// Byte offset of the match in the text as it stood when its category ran.
    /// Earlier categories may already have rewritten the text.
    pub position: usize,
}

/// PII sanitization.
pub trait ISanitizer: Send + Sync {
    /// Sanitize text, replacing PII with tokens.
    fn sanitize(&self, text: &str) -> ScrubberResult<SanitizedText>;
}
