//! In-memory note book: an ordered list of notes with tag queries.

use crate::domain::ValidationError;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Note;
use std::collections::BTreeSet;

/// Notes in insertion order. Positions are 0-based.
#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already loaded notes.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Append a note.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyNote` for blank text.
    pub fn create(&mut self, text: &str, tags: Vec<String>) -> Result<&Note, ValidationError> {
        let note = Note::new(text, tags)?;
        self.notes.push(note);
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// All notes in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Edit the note at `index`; `None` keeps the current text or tags.
    pub fn update(
        &mut self,
        index: usize,
        new_text: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> AssistantResult<()> {
        let note = self
            .notes
            .get_mut(index)
            .ok_or(AssistantError::NoteNotFound(index + 1))?;
        note.edit(new_text, new_tags)?;
        Ok(())
    }

    /// Remove and return the note at `index`.
    pub fn delete(&mut self, index: usize) -> AssistantResult<Note> {
        if index >= self.notes.len() {
            return Err(AssistantError::NoteNotFound(index + 1));
        }
        Ok(self.notes.remove(index))
    }

    /// Notes containing every keyword (ignoring case) and, when tags are given,
    /// at least one of them.
    pub fn search(&self, keywords: &[String], tags: &[String]) -> Vec<&Note> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        self.notes
            .iter()
            .filter(|note| {
                let text = note.text().to_lowercase();
                let text_match = keywords.iter().all(|k| text.contains(k.as_str()));
                let tags_match = tags.is_empty() || tags.iter().any(|tag| note.has_tag(tag));
                text_match && tags_match
            })
            .collect()
    }

    /// Distinct tags, lower-cased and sorted.
    pub fn all_tags(&self) -> Vec<String> {
        self.notes
            .iter()
            .flat_map(|note| note.tags().iter().map(|t| t.to_lowercase()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Notes carrying `tag`, ignoring case.
    pub fn by_tag(&self, tag: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.has_tag(tag)).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
