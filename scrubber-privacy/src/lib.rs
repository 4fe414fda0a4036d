//! # scrubber-privacy
//!
//! PII sanitization engine for text bound for third-party LLMs.
//! Eleven built-in categories (email, phone, SSN, card numbers, IPs, URLs,
//! API keys, passwords, JWTs, names, street addresses) plus runtime-registered
//! ones. Replacements are reversible through a hash-keyed store and every call
//! is summarized in an audit log.

pub mod audit;
pub mod degradation;
pub mod detector;
pub mod engine;
pub mod gate;
pub mod patterns;
pub mod redactor;
pub mod registry;
pub mod replacement;
pub mod scoring;
pub mod structural;
mod sync;
pub mod tracing_setup;

pub use audit::{BoundedAuditLog, InMemoryAuditLog};
pub use degradation::{DegradationTracker, PatternFailure};
pub use engine::PrivacyEngine;
pub use gate::SanitizationGate;
pub use patterns::{PatternRule, RegexMatcher};
pub use registry::PatternRegistry;
