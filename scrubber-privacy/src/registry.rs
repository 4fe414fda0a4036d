//! Ordered, mutable table of PII categories.

use std::collections::BTreeSet;

use crate::patterns::{builtin_rules, PatternRule};
use crate::tracing_setup::events;

/// Registered categories in scan order.
///
/// Overwriting a category keeps its slot; new categories go last.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<PatternRule>,
}

impl PatternRegistry {
    /// A registry holding every built-in category.
    pub fn with_builtins() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule, or replace the rule already under its category id.
    pub fn add_rule(&mut self, rule: PatternRule) {
        let existing = self
            .rules
            .iter()
            .position(|r| r.category_id == rule.category_id);
        events::pattern_added(&rule.category_id, &rule.risk_class, existing.is_some());
        match existing {
            Some(slot) => self.rules[slot] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Remove a category. Returns whether it was registered.
    pub fn remove(&mut self, category_id: &str) -> bool {
        match self.rules.iter().position(|r| r.category_id == category_id) {
            Some(index) => {
                self.rules.remove(index);
                events::pattern_removed(category_id);
                true
            }
            None => {
                events::pattern_missing(category_id);
                false
            }
        }
    }

    pub fn get(&self, category_id: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.category_id == category_id)
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.get(category_id).is_some()
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.rules.iter().map(|r| r.category_id.clone()).collect()
    }

    /// Rules in scan order.
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(registry: &PatternRegistry) -> Vec<&str> {
        registry
            .rules()
            .iter()
            .map(|r| r.category_id.as_str())
            .collect()
    }

    #[test]
    fn builtins_are_registered() {
        let registry = PatternRegistry::with_builtins();
        assert_eq!(registry.len(), 11);
        assert!(registry.contains("credit_card"));
        assert!(registry.contains("jwt_token"));
    }

    #[test]
    fn new_category_goes_last() {
        let mut registry = PatternRegistry::with_builtins();
        registry.add_rule(PatternRule::regex(
            "employee_id",
            r"EMP-\d{6}",
            "[EMPLOYEE_ID]",
            "personal_info",
            true,
        ));
        assert_eq!(order(&registry).last(), Some(&"employee_id"));
    }

    #[test]
    fn overwrite_keeps_scan_position() {
        let mut registry = PatternRegistry::with_builtins();
        registry.add_rule(PatternRule::regex(
            "phone",
            r"\d{3}-\d{4}",
            "[PHONE_REDACTED]",
            "contact_info",
            true,
        ));
        assert_eq!(order(&registry)[1], "phone");
        assert_eq!(registry.len(), 11);
        let describe = registry.get("phone").map(|r| r.matcher.describe());
        assert_eq!(describe.as_deref(), Some(r"regex /\d{3}-\d{4}/"));
    }

    #[test]
    fn remove_reports_presence() {
        let mut registry = PatternRegistry::with_builtins();
        assert!(registry.remove("name"));
        assert!(!registry.remove("name"));
        assert!(!registry.categories().contains("name"));
        assert_eq!(registry.len(), 10);
    }
}
