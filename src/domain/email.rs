//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("Failed to compile email regex")
});

/// Validate an email address and return it unchanged.
///
/// # Validation Rules
///
/// - Local part: one or more of `A-Z a-z 0-9 _ . + -`
/// - Domain: one or more of `A-Z a-z 0-9 -`, a dot, then one or more of
///   `A-Z a-z 0-9 - .`
/// - No `..` anywhere
/// - The domain must not start or end with `.`
///
/// # Errors
///
/// Returns the `ValidationError` naming the first rule that failed.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    if !EMAIL_REGEX.is_match(raw) {
        return Err(ValidationError::InvalidEmail(raw.to_string()));
    }

    if raw.contains("..") {
        return Err(ValidationError::EmailConsecutiveDots(raw.to_string()));
    }

    let domain = raw.split_once('@').map(|(_, domain)| domain).unwrap_or("");
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::EmailDomainEdgeDot(raw.to_string()));
    }

    Ok(raw.to_string())
}

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// See [`validate_email`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_email(raw).map(Self)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
