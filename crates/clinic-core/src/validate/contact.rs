//! Contact-number validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection for a contact number that does not match the required shape.
/// Carries the offending input for user display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid contact number {given:?}: expected 09 followed by 8 digits")]
pub struct InvalidFormat {
    pub given: String,
}

/// A contact number that has passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidContact(String);

impl ValidContact {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn contact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^09[0-9]{8}$").expect("contact pattern compiles"))
}

/// Validate a raw contact number.
///
/// Accepts exactly ten characters: `09` followed by 8 digits. Anything else
/// is rejected, never coerced.
pub fn validate_contact(contact: &str) -> Result<ValidContact, InvalidFormat> {
    if contact_pattern().is_match(contact) {
        Ok(ValidContact(contact.to_string()))
    } else {
        Err(InvalidFormat {
            given: contact.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_contact() {
        let contact = validate_contact("0912345678").unwrap();
        assert_eq!(contact.as_str(), "0912345678");
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        assert!(validate_contact("1912345678").is_err());
        assert!(validate_contact("0812345678").is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        // 9 and 11 characters
        assert!(validate_contact("091234567").is_err());
        assert!(validate_contact("09123456789").is_err());
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(validate_contact("09abcdefgh").is_err());
        assert!(validate_contact("09 1234567").is_err());
        assert!(validate_contact("").is_err());
    }

    #[test]
    fn test_rejection_carries_input() {
        let err = validate_contact("123456").unwrap_err();
        assert_eq!(err.given, "123456");
    }
}
