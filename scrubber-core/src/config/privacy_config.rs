use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Privacy subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Append `_<hash>` to replacement tokens.
    pub preserve_structure: bool,
    /// Per-category base confidence overrides.
    pub confidence_overrides: HashMap<String, f64>,
    /// Built-in categories to leave out of the registry.
    pub disabled_categories: Vec<String>,
    /// Extra categories registered after the built-ins.
    pub custom_patterns: Vec<CustomPatternConfig>,
    /// Cap on retained audit events; unbounded when absent.
    pub audit_log_capacity: Option<usize>,
    /// Read by callers deciding whether to sanitize before an LLM call.
    pub enable_pii_sanitization: bool,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            preserve_structure: defaults::DEFAULT_PRESERVE_STRUCTURE,
            confidence_overrides: HashMap::new(),
            disabled_categories: Vec::new(),
            custom_patterns: Vec::new(),
            audit_log_capacity: defaults::DEFAULT_AUDIT_LOG_CAPACITY,
            enable_pii_sanitization: defaults::DEFAULT_ENABLE_PII_SANITIZATION,
        }
    }
}

impl PrivacyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, confidence) in &self.confidence_overrides {
            if !(0.0..=1.0).contains(confidence) {
                return Err(ConfigError::InvalidValue {
                    field: format!("privacy.confidence_overrides.{category}"),
                    reason: format!("{confidence} is outside [0.0, 1.0]"),
                });
            }
        }
        if self.audit_log_capacity == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "privacy.audit_log_capacity".to_string(),
                reason: "must be at least 1 when set".to_string(),
            });
        }
        for custom in &self.custom_patterns {
            if custom.category_id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "privacy.custom_patterns.category_id".to_string(),
                    reason: "cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A user-defined category. The pattern is not compiled here; a broken
/// pattern degrades at first use like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPatternConfig {
    pub category_id: String,
    pub pattern: String,
    pub replacement_token: String,
    pub risk_class: String,
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_case_insensitive() -> bool {
    defaults::DEFAULT_CUSTOM_CASE_INSENSITIVE
}
