use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use serde_json::{json, Map, Value};

use scrubber_core::config::PrivacyConfig;
use scrubber_core::constants::{SANITIZATION_INFO_KEY, SANITIZER_VERSION};
use scrubber_core::errors::ScrubberResult;
use scrubber_core::traits::{IAuditSink, ISanitizer, SanitizedText};
use scrubber_core::{
    Detection, ReplacementRecord, SanitizationEvent, SanitizationStats, ScrubberConfig,
};

use crate::audit::{self, InMemoryAuditLog};
use crate::degradation::DegradationTracker;
use crate::patterns::PatternRule;
use crate::registry::PatternRegistry;
use crate::replacement::ReplacementStore;
use crate::scoring::ConfidenceTable;
use crate::sync::{lock, read, write};
use crate::tracing_setup::events;
use crate::{detector, redactor, structural};

/// Privacy engine that detects PII in text and replaces it with tokens.
///
/// Built once by the caller and shared behind an `Arc`; every operation takes
/// `&self`. Each sanitize call on non-empty text appends one event to the
/// audit sink, and every replacement is remembered so `restore_original` can
/// undo it for debugging.
pub struct PrivacyEngine {
    registry: RwLock<PatternRegistry>,
    scoring: ConfidenceTable,
    replacements: Mutex<ReplacementStore>,
    audit: Arc<dyn IAuditSink>,
    preserve_structure: bool,
}

impl PrivacyEngine {
    /// Engine with the built-in categories and default settings.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(PatternRegistry::with_builtins()),
            scoring: ConfidenceTable::new(),
            replacements: Mutex::new(ReplacementStore::new()),
            audit: Arc::new(InMemoryAuditLog::new()),
            preserve_structure: true,
        }
    }

    /// Engine shaped by the `[privacy]` section: disabled built-ins removed,
    /// custom patterns appended, confidence overrides and audit capacity applied.
    pub fn from_config(config: &ScrubberConfig) -> Self {
        Self::from_privacy_config(&config.privacy)
    }

    pub fn from_privacy_config(config: &PrivacyConfig) -> Self {
        let mut registry = PatternRegistry::with_builtins();
        for category_id in &config.disabled_categories {
            registry.remove(category_id);
        }
        for custom in &config.custom_patterns {
            registry.add_rule(PatternRule::regex(
                custom.category_id.as_str(),
                &custom.pattern,
                custom.replacement_token.as_str(),
                custom.risk_class.as_str(),
                custom.case_insensitive,
            ));
        }
        Self {
            registry: RwLock::new(registry),
            scoring: ConfidenceTable::with_overrides(config.confidence_overrides.clone()),
            replacements: Mutex::new(ReplacementStore::new()),
            audit: audit::sink_for_capacity(config.audit_log_capacity),
            preserve_structure: config.preserve_structure,
        }
    }

    /// Swap the audit sink.
    pub fn with_audit_sink(mut self, sink: Arc<dyn IAuditSink>) -> Self {
        self.audit = sink;
        self
    }

    /// Default structure-preserving mode for `sanitize_text` and `ISanitizer`.
    pub fn preserve_structure(&self) -> bool {
        self.preserve_structure
    }

    // ── Registry ──────────────────────────────────────────────────────────

    /// Register a regex category, or overwrite one. The source is not checked
    /// here; a bad one is reported and skipped on every pass that uses it.
    pub fn add_pattern(
        &self,
        category_id: &str,
        pattern: &str,
        replacement_token: &str,
        risk_class: &str,
    ) {
        self.add_rule(PatternRule::regex(
            category_id,
            pattern,
            replacement_token,
            risk_class,
            true,
        ));
    }

    /// Register a pre-built rule, or overwrite the one under its category id.
    pub fn add_rule(&self, rule: PatternRule) {
        write(&self.registry).add_rule(rule);
    }

    /// Remove a category. Absent categories are logged and reported as `false`.
    pub fn remove_pattern(&self, category_id: &str) -> bool {
        write(&self.registry).remove(category_id)
    }

    pub fn list_categories(&self) -> BTreeSet<String> {
        read(&self.registry).categories()
    }

    /// Copy of the rules so a pass never holds the registry lock.
    fn rules_snapshot(&self) -> Vec<PatternRule> {
        read(&self.registry).rules().to_vec()
    }

    // ── Detection ─────────────────────────────────────────────────────────

    /// Every match of every category in `text`. Touches no state.
    pub fn detect_pii(&self, text: &str) -> Vec<Detection> {
        self.detect_with_tracking(text).0
    }

    pub fn detect_with_tracking(&self, text: &str) -> (Vec<Detection>, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        if text.is_empty() {
            return (Vec::new(), tracker);
        }
        let text_length = text.chars().count();
        let _span = crate::detect_span!(text_length).entered();

        let rules = self.rules_snapshot();
        let detections = detector::detect(&rules, &self.scoring, text, &mut tracker);
        events::detection_completed(text_length, detections.len());
        (detections, tracker)
    }

    // ── Sanitization ──────────────────────────────────────────────────────

    /// Sanitize with the engine's default structure-preserving mode.
    pub fn sanitize_text(&self, text: &str) -> String {
        self.sanitize_with_options(text, self.preserve_structure)
    }

    /// Sanitize, choosing between `TOKEN_<hash>` and bare `TOKEN` output.
    pub fn sanitize_with_options(&self, text: &str, preserve_structure: bool) -> String {
        self.sanitize_with_tracking(text, preserve_structure).0.text
    }

    /// Sanitize with full degradation tracking. Returns the tracker alongside
    /// the sanitized text so callers can audit any pattern failures.
    pub fn sanitize_with_tracking(
        &self,
        text: &str,
        preserve_structure: bool,
    ) -> (SanitizedText, DegradationTracker) {
        let mut tracker = DegradationTracker::new();
        if text.is_empty() {
            let empty = SanitizedText {
                text: String::new(),
                redactions: Vec::new(),
            };
            return (empty, tracker);
        }

        let original_length = text.chars().count();
        let _span = crate::sanitize_span!(original_length, preserve_structure).entered();

        let rules = self.rules_snapshot();
        let pass = redactor::redact(&rules, text, preserve_structure, &mut tracker);

        {
            let mut store = lock(&self.replacements);
            for record in pass.records {
                store.upsert(record);
            }
        }

        let mut pii_types: Vec<String> = Vec::new();
        let mut risk_classes: Vec<String> = Vec::new();
        for redaction in &pass.redactions {
            if !pii_types.contains(&redaction.category_id) {
                pii_types.push(redaction.category_id.clone());
            }
            if !risk_classes.contains(&redaction.risk_class) {
                risk_classes.push(redaction.risk_class.clone());
            }
        }
        let event = SanitizationEvent::new(
            original_length,
            pass.text.chars().count(),
            pass.redactions.len(),
            pii_types,
            risk_classes,
        );
        events::sanitization_completed(&event);
        self.audit.append(event);

        let result = SanitizedText {
            text: pass.text,
            redactions: pass.redactions,
        };
        (result, tracker)
    }

    /// New value with every string leaf sanitized. Each non-empty leaf is a
    /// separate sanitize call with its own audit event.
    pub fn sanitize_value(&self, value: &Value) -> Value {
        structural::map_strings(value, &mut |s: &str| self.sanitize_text(s))
    }

    pub fn sanitize_dict(&self, map: &Map<String, Value>) -> Map<String, Value> {
        structural::map_object(map, &mut |s: &str| self.sanitize_text(s))
    }

    pub fn sanitize_list(&self, items: &[Value]) -> Vec<Value> {
        structural::map_array(items, &mut |s: &str| self.sanitize_text(s))
    }

    /// Sanitize the free-text fields of a test case record and stamp it with
    /// a `_sanitization_info` block. Returns a new record.
    pub fn sanitize_test_case(&self, record: &Map<String, Value>) -> Map<String, Value> {
        let mut sanitized =
            structural::map_test_case(record, &mut |s: &str| self.sanitize_text(s));
        let info = json!({
            "sanitized": true,
            "timestamp": Utc::now().to_rfc3339(),
            "pii_detected": self.replacement_map_size(),
            "sanitizer_version": SANITIZER_VERSION,
        });
        sanitized.insert(SANITIZATION_INFO_KEY.to_string(), info);
        sanitized
    }

    // ── Replacement store & audit ─────────────────────────────────────────

    /// Undo replacements known to the store. Debug aid: tokens from before the
    /// last `clear_logs`, or from another engine, stay as they are.
    pub fn restore_original(&self, sanitized: &str) -> String {
        lock(&self.replacements).restore(sanitized)
    }

    pub fn replacement_records(&self) -> Vec<ReplacementRecord> {
        lock(&self.replacements).records().to_vec()
    }

    pub fn replacement_map_size(&self) -> usize {
        lock(&self.replacements).len()
    }

    pub fn audit_events(&self) -> Vec<SanitizationEvent> {
        self.audit.events()
    }

    pub fn get_sanitization_stats(&self) -> SanitizationStats {
        let events = self.audit.events();
        audit::summarize(&events, self.replacement_map_size())
    }

    /// Empty the audit log and the replacement store.
    pub fn clear_logs(&self) {
        let events = self.audit.len();
        self.audit.clear();
        let replacements = {
            let mut store = lock(&self.replacements);
            let len = store.len();
            store.clear();
            len
        };
        events::logs_cleared(events, replacements);
    }
}

impl Default for PrivacyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ISanitizer for PrivacyEngine {
    fn sanitize(&self, text: &str) -> ScrubberResult<SanitizedText> {
        let (result, _tracker) = self.sanitize_with_tracking(text, self.preserve_structure);
        Ok(result)
    }
}
