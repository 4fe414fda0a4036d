use serde::{Deserialize, Serialize};

/// One matched span reported by detection. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub category_id: String,
    pub risk_class: String,
    /// The matched substring.
    pub text: String,
    /// Byte offsets into the scanned string.
    pub start: usize,
    pub end: usize,
    /// Always within [0.0, 1.0].
    pub confidence: f64,
}
