//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format of birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the shape is checked up front.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex"));

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `DD.MM.YYYY` birthday, rejecting dates after `today`.
///
/// # Errors
///
/// - `ValidationError::InvalidBirthdayFormat` on any shape or calendar error
/// - `ValidationError::FutureBirthday` if the date is strictly after `today`
pub fn validate_birthday_on(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !BIRTHDAY_SHAPE.is_match(raw) {
        return Err(ValidationError::InvalidBirthdayFormat(raw.to_string()));
    }

    let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthdayFormat(raw.to_string()))?;

    if date > today {
        return Err(ValidationError::FutureBirthday(date));
    }

    Ok(date)
}

/// Parse a `DD.MM.YYYY` birthday against the current local date.
pub fn validate_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    validate_birthday_on(raw, today())
}

/// A validated birthday: a calendar date that was not in the future when parsed.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday against today's date.
    ///
    /// # Errors
    ///
    /// See [`validate_birthday_on`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_birthday(raw).map(Self)
    }

    /// Parse a birthday against an explicit reference date.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        validate_birthday_on(raw, today).map(Self)
    }

    /// Parse a previously stored birthday.
    ///
    /// Only the format is checked: the value was validated when it was
    /// stored, and a clock change must not make it unreadable.
    pub fn parse_stored(raw: &str) -> Result<Self, ValidationError> {
        validate_birthday_on(raw, NaiveDate::MAX).map(Self)
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse_stored(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
