use personal_assistant::error::{StorageError, StorageResult};
use personal_assistant::models::Contact;
use personal_assistant::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data, made to fail on save, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    /// The collection as last saved.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load_all(&self) -> Vec<Contact> {
        self.track_call("load_all");
        self.stored()
    }

    fn save_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("save_all");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }

    fn clear(&self) -> StorageResult<bool> {
        self.track_call("clear");

        let mut contacts = self.contacts.lock().unwrap();
        let had_contacts = !contacts.is_empty();
        contacts.clear();
        Ok(had_contacts)
    }
}
