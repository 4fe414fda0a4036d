use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    RISK_CONTACT_INFO, RISK_CREDENTIALS, RISK_FINANCIAL, RISK_GOVERNMENT_ID, RISK_NETWORK,
    RISK_PERSONAL_INFO,
};

/// The built-in PII categories, in scan order.
///
/// Registries key categories by string so custom categories can sit next to
/// these; `as_str()` gives the key a built-in is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    Phone,
    Ssn,
    CreditCard,
    IpAddress,
    Url,
    ApiKey,
    Password,
    JwtToken,
    Name,
    Address,
}

impl PiiCategory {
    /// All built-in categories in declaration (= scan) order.
    pub const ALL: [PiiCategory; 11] = [
        Self::Email,
        Self::Phone,
        Self::Ssn,
        Self::CreditCard,
        Self::IpAddress,
        Self::Url,
        Self::ApiKey,
        Self::Password,
        Self::JwtToken,
        Self::Name,
        Self::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::CreditCard => "credit_card",
            Self::IpAddress => "ip_address",
            Self::Url => "url",
            Self::ApiKey => "api_key",
            Self::Password => "password",
            Self::JwtToken => "jwt_token",
            Self::Name => "name",
            Self::Address => "address",
        }
    }

    /// Look up a built-in category by its registry key.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }

    pub fn risk_class(&self) -> &'static str {
        match self {
            Self::Email | Self::Phone => RISK_CONTACT_INFO,
            Self::Ssn => RISK_GOVERNMENT_ID,
            Self::CreditCard => RISK_FINANCIAL,
            Self::IpAddress | Self::Url => RISK_NETWORK,
            Self::ApiKey | Self::Password | Self::JwtToken => RISK_CREDENTIALS,
            Self::Name | Self::Address => RISK_PERSONAL_INFO,
        }
    }

    /// Token written in place of a match. None of these contain digits, `@`,
    /// dots or lowercase letters, so no built-in pattern re-detects them.
    pub fn replacement_token(&self) -> &'static str {
        match self {
            Self::Email => "[EMAIL_REDACTED]",
            Self::Phone => "[PHONE_REDACTED]",
            Self::Ssn => "[SSN_REDACTED]",
            Self::CreditCard => "[CARD_REDACTED]",
            Self::IpAddress => "[IP_REDACTED]",
            Self::Url => "[URL_REDACTED]",
            Self::ApiKey => "[API_KEY_REDACTED]",
            Self::Password => "[PASSWORD_REDACTED]",
            Self::JwtToken => "[JWT_REDACTED]",
            Self::Name => "[NAME_REDACTED]",
            Self::Address => "[ADDRESS_REDACTED]",
        }
    }

    pub fn base_confidence(&self) -> f64 {
        match self {
            Self::Ssn => 0.98,
            Self::Email | Self::JwtToken => 0.95,
            Self::Phone | Self::Url => 0.90,
            Self::Password | Self::CreditCard => 0.85,
            Self::IpAddress => 0.80,
            Self::Address => 0.75,
            Self::ApiKey => 0.70,
            Self::Name => 0.60,
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for category in PiiCategory::ALL {
            assert_eq!(PiiCategory::from_id(category.as_str()), Some(category));
        }
        assert_eq!(PiiCategory::from_id("employee_id"), None);
    }

    #[test]
    fn tokens_carry_no_pii_shaped_characters() {
        for category in PiiCategory::ALL {
            let token = category.replacement_token();
            assert!(token.starts_with('[') && token.ends_with(']'));
            assert!(
                !token
                    .chars()
                    .any(|c| c.is_ascii_digit() || c.is_lowercase() || c == '@' || c == '.'),
                "token {token} contains a PII-shaped character"
            );
        }
    }

    #[test]
    fn serde_uses_registry_keys() {
        let json = serde_json::to_string(&PiiCategory::CreditCard).unwrap();
        assert_eq!(json, "\"credit_card\"");
    }
}
