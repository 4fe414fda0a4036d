// Single source of truth for all default values.

// --- Privacy ---
pub const DEFAULT_PRESERVE_STRUCTURE: bool = true;
pub const DEFAULT_ENABLE_PII_SANITIZATION: bool = true;
pub const DEFAULT_CUSTOM_CASE_INSENSITIVE: bool = true;
/// `None` keeps every audit event for the life of the process.
pub const DEFAULT_AUDIT_LOG_CAPACITY: Option<usize> = None;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const LOG_FILTER_ENV: &str = "SCRUBBER_LOG";
