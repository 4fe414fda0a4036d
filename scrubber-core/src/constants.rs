// Shared constants for the sanitizer. Tunables that users may change live in
// `config::defaults` instead.

/// Version string stamped into `_sanitization_info` blocks.
pub const SANITIZER_VERSION: &str = "1.0.0";

/// Number of hex characters of the content hash appended to replacement tokens.
pub const HASH_SUFFIX_LEN: usize = 8;

/// Base confidence for categories outside the built-in table.
pub const DEFAULT_BASE_CONFIDENCE: f64 = 0.50;

/// Matches longer than this many characters get `LONG_MATCH_BONUS`.
pub const LONG_MATCH_CHARS: usize = 20;
pub const LONG_MATCH_BONUS: f64 = 0.10;

/// Matches shorter than this many characters get `SHORT_MATCH_PENALTY`.
pub const SHORT_MATCH_CHARS: usize = 5;
pub const SHORT_MATCH_PENALTY: f64 = 0.20;

/// How many categories `get_sanitization_stats` reports as most common.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Message carried by the "no activity" stats sentinel.
pub const NO_ACTIVITY_MESSAGE: &str = "No sanitization performed yet";

/// Test case fields that may carry PII. Anything else passes through.
pub const TEST_CASE_PII_FIELDS: [&str; 8] = [
    "description",
    "summary",
    "title",
    "content",
    "steps",
    "expected_result",
    "test_data",
    "comments",
];

/// Test case field whose direct string children are also sanitized.
pub const METADATA_FIELD: &str = "metadata";

/// Key of the block stamped onto sanitized test cases.
pub const SANITIZATION_INFO_KEY: &str = "_sanitization_info";

// --- Risk classes ---
pub const RISK_CONTACT_INFO: &str = "contact_info";
pub const RISK_CREDENTIALS: &str = "credentials";
pub const RISK_FINANCIAL: &str = "financial";
pub const RISK_GOVERNMENT_ID: &str = "government_id";
pub const RISK_PERSONAL_INFO: &str = "personal_info";
pub const RISK_NETWORK: &str = "network";
