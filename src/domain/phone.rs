//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 13;

/// Strip every non-digit character and check the digit count.
///
/// Returns the digit-only form on success.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` if fewer than 10 or more than 13
/// digits remain.
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
        return Err(ValidationError::InvalidPhone {
            digits: digits.len(),
        });
    }

    Ok(digits)
}

/// A normalized phone number: digits only, 10 to 13 of them.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+38 (050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing it to digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the digit count is out of range.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_phone(raw).map(Self)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
