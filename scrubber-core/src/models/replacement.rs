use serde::{Deserialize, Serialize};

/// Reversible mapping for one distinct redacted literal.
///
/// Keyed by a short content hash of `original_value`. Two literals that share
/// a hash overwrite each other; this is a debug aid, not a vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRecord {
    pub hash_key: String,
    pub original_value: String,
    pub sanitized_value: String,
    pub category_id: String,
    pub risk_class: String,
}
