use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one sanitize call, appended to the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizationEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Length of the input, in characters.
    pub original_length: usize,
    /// Length of the output, in characters.
    pub sanitized_length: usize,
    /// Number of replacements made.
    pub pii_detected: usize,
    /// Distinct category ids seen, in first-seen order.
    pub pii_types: Vec<String>,
    /// Distinct risk classes seen, in first-seen order.
    pub risk_classes: Vec<String>,
}

impl SanitizationEvent {
    pub fn new(
        original_length: usize,
        sanitized_length: usize,
        pii_detected: usize,
        pii_types: Vec<String>,
        risk_classes: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            original_length,
            sanitized_length,
            pii_detected,
            pii_types,
            risk_classes,
        }
    }
}
