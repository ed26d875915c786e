//! Contact service layer.
//!
//! Owns the in-memory address book and persists it through a repository.

use crate::book::{AddOutcome, AddressBook};
use crate::error::StorageResult;
use crate::repositories::ContactRepository;
use std::sync::Arc;
use tracing::{debug, warn};

/// Address book bound to its storage.
pub struct ContactService {
    book: AddressBook,
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Build the address book from everything the repository holds.
    ///
    /// Records whose name repeats an earlier one (ignoring case) are skipped.
    pub fn load(repository: Arc<dyn ContactRepository>) -> Self {
        let mut book = AddressBook::new();

        for contact in repository.load_all() {
            let name = contact.name().to_string();
            if let AddOutcome::AlreadyExists(existing) = book.add(contact) {
                warn!(name = %name, existing = %existing, "Skipping duplicate stored contact");
            }
        }

        debug!(count = book.len(), "Address book loaded");
        Self { book, repository }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Write the whole address book to storage.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save_all(self.book.contacts())
    }
}
