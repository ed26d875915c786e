use crate::error::StorageResult;
use crate::models::{Contact, Note};

/// Repository for persisting the contact collection.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactRepository: Send + Sync {
    /// Load every stored contact.
    ///
    /// Missing or malformed storage yields an empty list, never an error.
    fn load_all(&self) -> Vec<Contact>;

    /// Replace the stored collection with `contacts`.
    fn save_all(&self, contacts: &[Contact]) -> StorageResult<()>;

    /// Remove the stored collection; reports whether anything was removed.
    fn clear(&self) -> StorageResult<bool>;
}

/// Repository for persisting the note collection.
pub trait NoteRepository: Send + Sync {
    /// Load every stored note.
    fn load_all(&self) -> Vec<Note>;

    /// Replace the stored collection with `notes`.
    fn save_all(&self, notes: &[Note]) -> StorageResult<()>;

    /// Remove the stored collection.
    fn clear(&self) -> StorageResult<bool>;
}
