//! Contact model representing one person in the address book.

use crate::domain::{Birthday, EmailAddress, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact in the address book.
///
/// Serializes to the stored record shape:
/// `{name, phones: [..], email: ..|null, address: ..|null, birthday: "DD.MM.YYYY"|null}`.
/// Deserializing runs every field through its validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    email: Option<EmailAddress>,

    #[serde(default)]
    address: Option<String>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

/// Singular contact fields that can be edited by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Email,
    Address,
    Birthday,
}

impl FieldName {
    /// Lower-case name used in commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Address => "address",
            Self::Birthday => "birthday",
        }
    }
}

impl FromStr for FieldName {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            "birthday" => Ok(Self::Birthday),
            _ => Err(AssistantError::UnsupportedField(s.to_string())),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated new value for one singular field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Email(EmailAddress),
    Address(String),
    Birthday(Birthday),
}

impl FieldUpdate {
    /// Validate `raw` for the given field.
    pub fn parse(field: FieldName, raw: &str) -> AssistantResult<Self> {
        let update = match field {
            FieldName::Email => Self::Email(EmailAddress::new(raw)?),
            FieldName::Address => Self::Address(raw.to_string()),
            FieldName::Birthday => Self::Birthday(Birthday::new(raw)?),
        };
        Ok(update)
    }
}

impl Contact {
    /// Create a new contact, validating each optional field that is present.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Validation` if the email or birthday is invalid.
    pub fn new(
        name: impl Into<String>,
        address: Option<&str>,
        email: Option<&str>,
        birthday: Option<&str>,
    ) -> AssistantResult<Self> {
        let email = non_empty(email).map(EmailAddress::new).transpose()?;
        let birthday = non_empty(birthday).map(Birthday::new).transpose()?;
        let address = non_empty(address).map(str::to_string);

        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            email,
            address,
            birthday,
        })
    }

    /// The contact's name, with its original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> AssistantResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with the validated `new`.
    ///
    /// `old` is compared literally against the stored digit-only form.
    ///
    /// # Errors
    ///
    /// - `AssistantError::PhoneNotFound` if no stored phone equals `old`
    /// - `AssistantError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AssistantResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| AssistantError::PhoneNotFound(old.to_string()))?;

        self.phones[position] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Set a singular field from its command name and a raw value.
    ///
    /// Nothing changes when the name is unsupported or the value is invalid.
    pub fn edit_field(&mut self, field: &str, raw: &str) -> AssistantResult<()> {
        let update = FieldUpdate::parse(field.parse()?, raw)?;
        self.apply(update);
        Ok(())
    }

    /// Apply a validated field update.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Email(email) => self.email = Some(email),
            FieldUpdate::Address(address) => self.address = Some(address),
            FieldUpdate::Birthday(birthday) => self.birthday = Some(birthday),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Name: {}, Phones: {}", self.name, phones)?;

        if let Some(ref email) = self.email {
            write!(f, " | Email: {}", email)?;
        }
        if let Some(ref address) = self.address {
            write!(f, " | Address: {}", address)?;
        }
        if let Some(ref birthday) = self.birthday {
            write!(f, " | Birthday: {}", birthday)?;
        }

        Ok(())
    }
}
