mod json_contact_repository;
mod json_note_repository;
mod json_store;
mod traits;

pub use json_contact_repository::{JsonContactRepository, CONTACTS_FILE};
pub use json_note_repository::{JsonNoteRepository, NOTES_FILE};
pub use json_store::JsonFileStore;
pub use traits::{ContactRepository, NoteRepository};
