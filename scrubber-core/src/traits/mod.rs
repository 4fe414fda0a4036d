mod audit_sink;
mod matcher;
mod sanitizer;

pub use audit_sink::IAuditSink;
pub use matcher::IPiiMatcher;
pub use sanitizer::{ISanitizer, Redaction, SanitizedText};
