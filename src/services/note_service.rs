//! Note service layer.
//!
//! Every change is written to storage before returning; a change that cannot
//! be saved is undone.

use crate::book::NoteBook;
use crate::error::{AssistantResult, StorageResult};
use crate::models::Note;
use crate::repositories::NoteRepository;
use std::sync::Arc;

/// Note book bound to its storage.
pub struct NoteService {
    notes: NoteBook,
    repository: Arc<dyn NoteRepository>,
}

impl NoteService {
    /// Build the note book from everything the repository holds.
    pub fn load(repository: Arc<dyn NoteRepository>) -> Self {
        let notes = NoteBook::from_notes(repository.load_all());
        tracing::debug!(count = notes.len(), "Note book loaded");
        Self { notes, repository }
    }

    /// Create a note and save. Returns the new note's 0-based position.
    pub fn create(&mut self, text: &str, tags: Vec<String>) -> AssistantResult<usize> {
        self.commit(|notes| {
            notes.create(text, tags)?;
            Ok(notes.len() - 1)
        })
    }

    /// Edit the note at `index` and save.
    pub fn update(
        &mut self,
        index: usize,
        new_text: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> AssistantResult<()> {
        self.commit(|notes| notes.update(index, new_text, new_tags))
    }

    /// Remove the note at `index` and save.
    pub fn delete(&mut self, index: usize) -> AssistantResult<Note> {
        self.commit(|notes| notes.delete(index))
    }

    /// Apply `change` and save; the note book is left as it was if either fails.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut NoteBook) -> AssistantResult<T>,
    ) -> AssistantResult<T> {
        let snapshot = self.notes.clone();
        let outcome = change(&mut self.notes).and_then(|value| {
            self.repository.save_all(self.notes.list())?;
            Ok(value)
        });

        if outcome.is_err() {
            self.notes = snapshot;
        }
        outcome
    }

    pub fn list(&self) -> &[Note] {
        self.notes.list()
    }

    pub fn search(&self, keywords: &[String], tags: &[String]) -> Vec<&Note> {
        self.notes.search(keywords, tags)
    }

    pub fn all_tags(&self) -> Vec<String> {
        self.notes.all_tags()
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.by_tag(tag)
    }

    /// Write every note to storage.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save_all(self.notes.list())
    }
}
