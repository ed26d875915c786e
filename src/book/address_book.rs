//! In-memory address book.
//!
//! Contacts are kept in insertion order next to an index keyed by the
//! lower-cased name, so lookups are case-insensitive while each contact keeps
//! the casing it was added with.

use super::birthdays::{self, UpcomingBirthday};
use crate::domain::{self, ValidationError};
use crate::models::Contact;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Result of [`AddressBook::add`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The contact was inserted.
    Added,
    /// A contact with the same name (ignoring case) exists; carries its stored name.
    AlreadyExists(String),
}

/// A collection of contacts keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact unless its name is already taken, ignoring case.
    pub fn add(&mut self, contact: Contact) -> AddOutcome {
        let key = key(contact.name());
        if let Some(&position) = self.index.get(&key) {
            return AddOutcome::AlreadyExists(self.contacts[position].name().to_string());
        }

        tracing::debug!(name = %contact.name(), "Contact added");
        self.index.insert(key, self.contacts.len());
        self.contacts.push(contact);
        AddOutcome::Added
    }

    /// Find a contact by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.index.get(&key(name)).map(|&position| &self.contacts[position])
    }

    /// Find a contact by name for mutation, ignoring case.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        match self.index.get(&key(name)) {
            Some(&position) => self.contacts.get_mut(position),
            None => None,
        }
    }

    /// Remove a contact by name, ignoring case.
    ///
    /// Returns the removed contact, which carries the exact stored name.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let position = self.index.remove(&key(name))?;
        let removed = self.contacts.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %removed.name(), "Contact deleted");
        Some(removed)
    }

    /// Case-insensitive substring search over name, phones and email.
    ///
    /// Each contact appears at most once; results follow insertion order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.to_lowercase();

        self.contacts
            .iter()
            .filter(|contact| {
                contact.name().to_lowercase().contains(&query)
                    || contact
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(&query))
                    || contact
                        .email()
                        .map(|email| email.as_str().to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect()
    }

    /// Birthdays within `days` days from today.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeRange` if `days` is negative.
    pub fn upcoming_birthdays(&self, days: i64) -> Result<Vec<UpcomingBirthday>, ValidationError> {
        self.upcoming_birthdays_from(domain::today(), days)
    }

    /// Birthdays within `days` days from `today`.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<UpcomingBirthday>, ValidationError> {
        birthdays::upcoming_birthdays(&self.contacts, today, days)
    }

    /// All contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
