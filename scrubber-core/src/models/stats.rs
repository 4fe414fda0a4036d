use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::NO_ACTIVITY_MESSAGE;

/// Aggregate view over the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SanitizationStats {
    /// Nothing has been sanitized since construction or the last clear.
    NoActivity { message: String },
    Active(StatsSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_sanitizations: usize,
    pub total_pii_detected: usize,
    pub average_pii_per_text: f64,
    /// `(category_id, number of calls it appeared in)`, most frequent first.
    pub most_common_pii_types: Vec<(String, usize)>,
    pub replacement_map_size: usize,
    pub last_sanitization: Option<DateTime<Utc>>,
}

impl SanitizationStats {
    pub fn no_activity() -> Self {
        Self::NoActivity {
            message: NO_ACTIVITY_MESSAGE.to_string(),
        }
    }

    pub fn is_no_activity(&self) -> bool {
        matches!(self, Self::NoActivity { .. })
    }

    pub fn summary(&self) -> Option<&StatsSummary> {
        match self {
            Self::Active(summary) => Some(summary),
            Self::NoActivity { .. } => None,
        }
    }
}
