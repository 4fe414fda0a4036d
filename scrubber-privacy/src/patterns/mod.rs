pub mod pii;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use scrubber_core::errors::{PatternError, ScrubberResult};
use scrubber_core::traits::IPiiMatcher;
use scrubber_core::PiiCategory;

use pii::PiiPattern;

/// One registered PII category: how to find it and what to write instead.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub category_id: String,
    pub matcher: Arc<dyn IPiiMatcher>,
    pub replacement_token: String,
    pub risk_class: String,
}

impl PatternRule {
    pub fn new(
        category_id: impl Into<String>,
        matcher: Arc<dyn IPiiMatcher>,
        replacement_token: impl Into<String>,
        risk_class: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            matcher,
            replacement_token: replacement_token.into(),
            risk_class: risk_class.into(),
        }
    }

    /// Regex-backed rule. The source is compiled here, but a bad source does
    /// not fail construction: it surfaces as an error from the matcher.
    pub fn regex(
        category_id: impl Into<String>,
        source: &str,
        replacement_token: impl Into<String>,
        risk_class: impl Into<String>,
        case_insensitive: bool,
    ) -> Self {
        let category_id = category_id.into();
        let matcher = RegexMatcher::compile(&category_id, source, case_insensitive);
        Self::new(category_id, Arc::new(matcher), replacement_token, risk_class)
    }

    /// The built-in rule for a category.
    pub fn builtin(category: PiiCategory) -> Self {
        match pii::all_patterns().into_iter().find(|p| p.category == category) {
            Some(pattern) => Self::from_builtin(&pattern),
            None => Self::new(
                category.as_str(),
                Arc::new(RegexMatcher::broken(category.as_str(), "", "no built-in pattern")),
                category.replacement_token(),
                category.risk_class(),
            ),
        }
    }

    fn from_builtin(pattern: &PiiPattern) -> Self {
        let category = pattern.category;
        let matcher =
            RegexMatcher::from_compiled(category.as_str(), pattern.source, pattern.regex.as_ref());
        Self::new(
            category.as_str(),
            Arc::new(matcher),
            category.replacement_token(),
            category.risk_class(),
        )
    }
}

/// Rules for every built-in category, in scan order.
pub fn builtin_rules() -> Vec<PatternRule> {
    pii::all_patterns()
        .iter()
        .map(PatternRule::from_builtin)
        .collect()
}

/// `IPiiMatcher` over a regular expression.
///
/// Holds the compile error instead of the regex when the source is invalid, so
/// registering never fails and every use reports the problem.
#[derive(Clone)]
pub struct RegexMatcher {
    category_id: String,
    source: String,
    compiled: Result<Regex, String>,
}

impl RegexMatcher {
    pub fn compile(category_id: &str, source: &str, case_insensitive: bool) -> Self {
        let compiled = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| e.to_string());
        Self {
            category_id: category_id.to_string(),
            source: source.to_string(),
            compiled,
        }
    }

    fn from_compiled(category_id: &str, source: &str, regex: Option<&Regex>) -> Self {
        match regex {
            Some(regex) => Self {
                category_id: category_id.to_string(),
                source: source.to_string(),
                compiled: Ok(regex.clone()),
            },
            None => Self::broken(category_id, source, "regex compilation failed"),
        }
    }

    fn broken(category_id: &str, source: &str, reason: &str) -> Self {
        Self {
            category_id: category_id.to_string(),
            source: source.to_string(),
            compiled: Err(reason.to_string()),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }
}

impl fmt::Debug for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexMatcher")
            .field("category_id", &self.category_id)
            .field("source", &self.source)
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl IPiiMatcher for RegexMatcher {
    fn find_spans(&self, text: &str) -> ScrubberResult<Vec<Range<usize>>> {
        let regex = self
            .compiled
            .as_ref()
            .map_err(|reason| PatternError::InvalidPattern {
                category_id: self.category_id.clone(),
                reason: reason.clone(),
            })?;
        Ok(regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect())
    }

    fn describe(&self) -> String {
        format!("regex /{}/", self.source)
    }
}

/// Spans from a matcher, cut down to the ones that can be applied to `text`:
/// non-empty, in bounds, on char boundaries and not overlapping an earlier
/// span. Custom matchers are not trusted to get this right.
pub(crate) fn usable_spans(text: &str, mut spans: Vec<Range<usize>>) -> Vec<Range<usize>> {
    spans.sort_by_key(|s| (s.start, s.end));
    let mut kept: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for span in spans {
        if span.start >= span.end
            || span.start < cursor
            || span.end > text.len()
            || !text.is_char_boundary(span.start)
            || !text.is_char_boundary(span.end)
        {
            continue;
        }
        cursor = span.end;
        kept.push(span);
    }
    kept
}
