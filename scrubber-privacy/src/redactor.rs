//! The rewriting pass behind every sanitize call.

use scrubber_core::traits::Redaction;
use scrubber_core::ReplacementRecord;

use crate::degradation::DegradationTracker;
use crate::patterns::{usable_spans, PatternRule};
use crate::replacement::content_hash;

/// Output of one pass: the rewritten text, what was replaced, and the
/// records the replacement store should learn.
#[derive(Debug, Default)]
pub struct RedactionPass {
    pub text: String,
    pub redactions: Vec<Redaction>,
    pub records: Vec<ReplacementRecord>,
}

/// Apply `rules` to `text` one category at a time.
///
/// Each category scans the text as left by the categories before it, and all
/// of its matches are spliced in one left-to-right rebuild.
pub fn redact(
    rules: &[PatternRule],
    text: &str,
    preserve_structure: bool,
    tracker: &mut DegradationTracker,
) -> RedactionPass {
    let mut pass = RedactionPass {
        text: text.to_string(),
        ..RedactionPass::default()
    };

    for rule in rules {
        let spans = match rule.matcher.find_spans(&pass.text) {
            Ok(spans) => usable_spans(&pass.text, spans),
            Err(e) => {
                tracker.record_failure(&rule.category_id, &rule.matcher.describe(), &e.to_string());
                continue;
            }
        };
        if spans.is_empty() {
            continue;
        }

        let current = &pass.text;
        let mut rebuilt = String::with_capacity(current.len());
        let mut cursor = 0;
        for span in spans {
            let original = &current[span.clone()];
            let hash = content_hash(original);
            let replacement = if preserve_structure {
                format!("{}_{}", rule.replacement_token, hash)
            } else {
                rule.replacement_token.clone()
            };

            rebuilt.push_str(&current[cursor..span.start]);
            rebuilt.push_str(&replacement);
            cursor = span.end;

            pass.redactions.push(Redaction {
                category_id: rule.category_id.clone(),
                risk_class: rule.risk_class.clone(),
                replacement: replacement.clone(),
                hash: hash.clone(),
                original_length: original.chars().count(),
                position: span.start,
            });
            pass.records.push(ReplacementRecord {
                hash_key: hash,
                original_value: original.to_string(),
                sanitized_value: replacement,
                category_id: rule.category_id.clone(),
                risk_class: rule.risk_class.clone(),
            });
        }
        rebuilt.push_str(&current[cursor..]);
        pass.text = rebuilt;
    }
    pass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::builtin_rules;

    fn run(text: &str, preserve: bool) -> RedactionPass {
        let mut tracker = DegradationTracker::new();
        let pass = redact(&builtin_rules(), text, preserve, &mut tracker);
        assert!(!tracker.has_failures());
        pass
    }

    #[test]
    fn every_match_in_a_category_is_replaced() {
        let pass = run("a@example.com, b@example.com and c@example.com", true);
        assert_eq!(pass.redactions.len(), 3);
        assert!(!pass.text.contains("@example.com"));
        assert_eq!(pass.text.matches("[EMAIL_REDACTED]_").count(), 3);
    }

    #[test]
    fn bare_tokens_without_structure() {
        let pass = run("mail a@example.com", false);
        assert_eq!(pass.text, "mail [EMAIL_REDACTED]");
        assert_eq!(pass.records[0].sanitized_value, "[EMAIL_REDACTED]");
    }

    #[test]
    fn hash_suffix_matches_record() {
        let pass = run("mail a@example.com", true);
        let record = &pass.records[0];
        assert_eq!(record.hash_key, content_hash("a@example.com"));
        assert_eq!(record.sanitized_value, format!("[EMAIL_REDACTED]_{}", record.hash_key));
        assert_eq!(pass.text, format!("mail {}", record.sanitized_value));
    }

    #[test]
    fn redaction_reports_position_and_length() {
        let pass = run("mail a@example.com", true);
        let redaction = &pass.redactions[0];
        assert_eq!(redaction.position, 5);
        assert_eq!(redaction.original_length, 13);
        assert_eq!(redaction.category_id, "email");
        assert_eq!(redaction.risk_class, "contact_info");
    }

    #[test]
    fn multibyte_text_around_matches_survives() {
        let pass = run("café: a@example.com, 東京", true);
        assert!(pass.text.starts_with("café: [EMAIL_REDACTED]_"));
        assert!(pass.text.ends_with(", 東京"));
    }
}
