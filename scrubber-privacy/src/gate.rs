//! The switch callers consult before handing content to an LLM.

use std::sync::Arc;

use serde_json::{Map, Value};

use scrubber_core::config::PrivacyConfig;

use crate::engine::PrivacyEngine;
use crate::tracing_setup::events;

/// Sanitizes outbound content when enabled and passes it through otherwise.
#[derive(Clone)]
pub struct SanitizationGate {
    engine: Arc<PrivacyEngine>,
    enabled: bool,
}

impl SanitizationGate {
    pub fn new(engine: Arc<PrivacyEngine>, enabled: bool) -> Self {
        Self { engine, enabled }
    }

    /// Gate switched by `enable_pii_sanitization`.
    pub fn from_config(engine: Arc<PrivacyEngine>, config: &PrivacyConfig) -> Self {
        Self::new(engine, config.enable_pii_sanitization)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn engine(&self) -> &Arc<PrivacyEngine> {
        &self.engine
    }

    /// Free text such as a requirement or a user story.
    pub fn prepare_text(&self, content: &str) -> String {
        if !self.enabled {
            events::gate_bypassed("text");
            return content.to_string();
        }
        self.engine.sanitize_text(content)
    }

    /// Nested issue or page data, sanitized leaf by leaf.
    pub fn prepare_map(&self, data: &Map<String, Value>) -> Map<String, Value> {
        if !self.enabled {
            events::gate_bypassed("map");
            return data.clone();
        }
        self.engine.sanitize_dict(data)
    }
}
