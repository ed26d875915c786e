//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for contact fields: phone numbers,
//! email addresses and birthdays. Each wrapper validates and normalizes at
//! construction time, so a contact never holds an unvalidated value.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod phone;

pub use birthday::{today, validate_birthday, validate_birthday_on, Birthday, BIRTHDAY_FORMAT};
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use phone::{validate_phone, PhoneNumber};
