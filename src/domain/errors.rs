//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number does not have 10 to 13 digits.
    InvalidPhone { digits: usize },

    /// The email address does not match `local@domain.tld`.
    InvalidEmail(String),

    /// The email address contains `..`.
    EmailConsecutiveDots(String),

    /// The domain part of the email starts or ends with `.`.
    EmailDomainEdgeDot(String),

    /// The birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthdayFormat(String),

    /// The birthday lies after the reference date.
    FutureBirthday(NaiveDate),

    /// A day window was negative.
    NegativeRange(i64),

    /// A note with no text after trimming.
    EmptyNote,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone { digits } => write!(
                f,
                "Phone number must contain from 10 to 13 digits, got {}",
                digits
            ),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email address: {} (expected user@domain.com)",
                email
            ),
            Self::EmailConsecutiveDots(email) => {
                write!(f, "Email must not contain consecutive dots: {}", email)
            }
            Self::EmailDomainEdgeDot(email) => write!(
                f,
                "Email domain must not start or end with a dot: {}",
                email
            ),
            Self::InvalidBirthdayFormat(raw) => {
                write!(f, "Invalid date: {} (expected DD.MM.YYYY)", raw)
            }
            Self::FutureBirthday(date) => write!(
                f,
                "Birthday cannot be in the future: {}",
                date.format("%d.%m.%Y")
            ),
            Self::NegativeRange(days) => {
                write!(f, "Number of days cannot be negative, got {}", days)
            }
            Self::EmptyNote => write!(f, "Note text cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
