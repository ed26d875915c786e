use super::json_store::JsonFileStore;
use super::traits::NoteRepository;
use crate::error::StorageResult;
use crate::models::Note;
use std::path::{Path, PathBuf};

/// Default file name for the note collection.
pub const NOTES_FILE: &str = "notes.json";

/// Note repository backed by a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonNoteRepository {
    store: JsonFileStore,
}

impl JsonNoteRepository {
    pub fn new(storage_dir: impl AsRef<Path>, filename: &str) -> StorageResult<Self> {
        Ok(Self {
            store: JsonFileStore::new(storage_dir, filename)?,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }
}

impl NoteRepository for JsonNoteRepository {
    fn load_all(&self) -> Vec<Note> {
        let notes = self.store.load::<Note>();
        tracing::info!(count = notes.len(), path = %self.store.path().display(), "Loaded notes");
        notes
    }

    fn save_all(&self, notes: &[Note]) -> StorageResult<()> {
        self.store.save(notes)
    }

    fn clear(&self) -> StorageResult<bool> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_save_and_load_notes() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path(), NOTES_FILE).unwrap();
        let note = Note::new("Buy milk", vec!["shopping".to_string()]).unwrap();
        repo.save_all(std::slice::from_ref(&note)).unwrap();

        assert_eq!(repo.load_all(), vec![note]);
    }

    #[test]
    fn test_load_defaults_missing_tags_and_skips_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path(), NOTES_FILE).unwrap();
        fs::write(
            repo.path(),
            r#"[{"text": "Plain"}, {"text": "   ", "tags": []}, {"tags": ["x"]}]"#,
        )
        .unwrap();

        let notes = repo.load_all();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text(), "Plain");
        assert!(notes[0].tags().is_empty());
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonNoteRepository::new(dir.path(), NOTES_FILE).unwrap();
        repo.save_all(&[]).unwrap();
        assert!(repo.clear().unwrap());
        assert!(repo.load_all().is_empty());
    }
}
