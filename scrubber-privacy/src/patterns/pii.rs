use regex::{Regex, RegexBuilder};
use scrubber_core::PiiCategory;
use std::sync::LazyLock;

/// A compiled built-in detection pattern.
pub struct PiiPattern {
    pub category: PiiCategory,
    pub source: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! pii_pattern {
    ($name:ident, $source:ident, $case_insensitive:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            RegexBuilder::new($source)
                .case_insensitive($case_insensitive)
                .build()
                .ok()
        });
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pub const EMAIL_SOURCE: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
pii_pattern!(RE_EMAIL, EMAIL_SOURCE, true);

// ── Phone (US style, optional +1 and punctuation) ─────────────────────────
pub const PHONE_SOURCE: &str = r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";
pii_pattern!(RE_PHONE, PHONE_SOURCE, true);

// ── SSN, dashes optional ───────────────────────────────────────────────────
pub const SSN_SOURCE: &str = r"\b\d{3}-?\d{2}-?\d{4}\b";
pii_pattern!(RE_SSN, SSN_SOURCE, true);

// ── Credit card: four groups of four ───────────────────────────────────────
pub const CREDIT_CARD_SOURCE: &str = r"\b(?:\d{4}[-\s]?){3}\d{4}\b";
pii_pattern!(RE_CREDIT_CARD, CREDIT_CARD_SOURCE, true);

// ── IPv4 dotted quad ───────────────────────────────────────────────────────
pub const IP_ADDRESS_SOURCE: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";
pii_pattern!(RE_IP_ADDRESS, IP_ADDRESS_SOURCE, true);

// ── URL: stops at whitespace, quotes and brackets ──────────────────────────
pub const URL_SOURCE: &str = r#"https?://[^\s<>"{}|\\^`\[\]]+"#;
pii_pattern!(RE_URL, URL_SOURCE, true);

// ── API key: any bare alphanumeric run of 20+ ──────────────────────────────
pub const API_KEY_SOURCE: &str = r"\b[A-Za-z0-9]{20,}\b";
pii_pattern!(RE_API_KEY, API_KEY_SOURCE, true);

// ── Password assignment ────────────────────────────────────────────────────
pub const PASSWORD_SOURCE: &str = r"(?:password|pwd|pass)\s*[:=]\s*\S+";
pii_pattern!(RE_PASSWORD, PASSWORD_SOURCE, true);

// ── JWT: three base64url segments ──────────────────────────────────────────
pub const JWT_TOKEN_SOURCE: &str = r"eyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*";
pii_pattern!(RE_JWT_TOKEN, JWT_TOKEN_SOURCE, true);

// ── Name: two capitalized words. Case matters, or every word pair matches.
pub const NAME_SOURCE: &str = r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b";
pii_pattern!(RE_NAME, NAME_SOURCE, false);

// ── Street address ending in a suffix word ─────────────────────────────────
pub const ADDRESS_SOURCE: &str =
    r"\d+\s+[A-Za-z0-9\s,.-]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr)\b";
pii_pattern!(RE_ADDRESS, ADDRESS_SOURCE, true);

/// All built-in patterns in scan order.
pub fn all_patterns() -> Vec<PiiPattern> {
    PiiCategory::ALL
        .into_iter()
        .map(|category| {
            let (source, regex) = match category {
                PiiCategory::Email => (EMAIL_SOURCE, &RE_EMAIL),
                PiiCategory::Phone => (PHONE_SOURCE, &RE_PHONE),
                PiiCategory::Ssn => (SSN_SOURCE, &RE_SSN),
                PiiCategory::CreditCard => (CREDIT_CARD_SOURCE, &RE_CREDIT_CARD),
                PiiCategory::IpAddress => (IP_ADDRESS_SOURCE, &RE_IP_ADDRESS),
                PiiCategory::Url => (URL_SOURCE, &RE_URL),
                PiiCategory::ApiKey => (API_KEY_SOURCE, &RE_API_KEY),
                PiiCategory::Password => (PASSWORD_SOURCE, &RE_PASSWORD),
                PiiCategory::JwtToken => (JWT_TOKEN_SOURCE, &RE_JWT_TOKEN),
                PiiCategory::Name => (NAME_SOURCE, &RE_NAME),
                PiiCategory::Address => (ADDRESS_SOURCE, &RE_ADDRESS),
            };
            PiiPattern {
                category,
                source,
                regex,
            }
        })
        .collect()
}
