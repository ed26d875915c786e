use personal_assistant::error::{StorageError, StorageResult};
use personal_assistant::models::Note;
use personal_assistant::repositories::NoteRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock note repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNoteRepository {
    notes: Arc<Mutex<Vec<Note>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let repo = Self::new();
        *repo.notes.lock().unwrap() = notes;
        repo
    }

    pub fn stored(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl NoteRepository for MockNoteRepository {
    fn load_all(&self) -> Vec<Note> {
        self.track_call("load_all");
        self.stored()
    }

    fn save_all(&self, notes: &[Note]) -> StorageResult<()> {
        self.track_call("save_all");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }

        *self.notes.lock().unwrap() = notes.to_vec();
        Ok(())
    }

    fn clear(&self) -> StorageResult<bool> {
        self.track_call("clear");

        let mut notes = self.notes.lock().unwrap();
        let had_notes = !notes.is_empty();
        notes.clear();
        Ok(had_notes)
    }
}
