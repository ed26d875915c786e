use super::json_store::JsonFileStore;
use super::traits::ContactRepository;
use crate::error::StorageResult;
use crate::models::Contact;
use std::path::{Path, PathBuf};

/// Default file name for the contact collection.
pub const CONTACTS_FILE: &str = "contacts.json";

/// Contact repository backed by a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonContactRepository {
    store: JsonFileStore,
}

impl JsonContactRepository {
    /// Create a repository storing contacts in `<storage_dir>/<filename>`.
    pub fn new(storage_dir: impl AsRef<Path>, filename: &str) -> StorageResult<Self> {
        Ok(Self {
            store: JsonFileStore::new(storage_dir, filename)?,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }
}

impl ContactRepository for JsonContactRepository {
    fn load_all(&self) -> Vec<Contact> {
        let contacts = self.store.load::<Contact>();
        tracing::info!(count = contacts.len(), path = %self.store.path().display(), "Loaded contacts");
        contacts
    }

    fn save_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.store.save(contacts)
    }

    fn clear(&self) -> StorageResult<bool> {
        self.store.clear()
    }
}
