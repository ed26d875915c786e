//! Note model: a free-text entry with optional tags.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored form of a note, before its text is validated.
#[derive(Debug, Deserialize)]
struct NoteRecord {
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// A note in the note book.
///
/// The text is always trimmed and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "NoteRecord")]
pub struct Note {
    text: String,
    tags: Vec<String>,
}

impl TryFrom<NoteRecord> for Note {
    type Error = ValidationError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        Note::new(&record.text, record.tags)
    }
}

impl Note {
    /// Create a new note.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyNote` if the text is blank.
    pub fn new(text: &str, tags: Vec<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            text: Self::clean_text(text)?,
            tags,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace the text and/or tags; `None` keeps the current value.
    ///
    /// Nothing changes if the new text is blank.
    pub fn edit(
        &mut self,
        new_text: Option<&str>,
        new_tags: Option<Vec<String>>,
    ) -> Result<(), ValidationError> {
        if let Some(text) = new_text {
            self.text = Self::clean_text(text)?;
        }
        if let Some(tags) = new_tags {
            self.tags = tags;
        }
        Ok(())
    }

    /// Whether the note carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    fn clean_text(text: &str) -> Result<String, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyNote);
        }
        Ok(trimmed.to_string())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if !self.tags.is_empty() {
            write!(f, " [tags: {}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_note_new_trims() {
        let note = Note::new("  buy milk  ", tags(&["shopping"])).unwrap();
        assert_eq!(note.text(), "buy milk");
        assert_eq!(note.tags(), ["shopping"]);
    }

    #[test]
    fn test_note_new_empty_fails() {
        assert_eq!(Note::new("   ", Vec::new()), Err(ValidationError::EmptyNote));
    }

    #[test]
    fn test_note_edit_keeps_omitted_parts() {
        let mut note = Note::new("draft", tags(&["work"])).unwrap();
        note.edit(None, Some(tags(&["home"]))).unwrap();
        assert_eq!(note.text(), "draft");
        assert_eq!(note.tags(), ["home"]);

        note.edit(Some("final"), None).unwrap();
        assert_eq!(note.text(), "final");
        assert_eq!(note.tags(), ["home"]);
    }

    #[test]
    fn test_note_edit_blank_text_fails() {
        let mut note = Note::new("draft", Vec::new()).unwrap();
        assert!(note.edit(Some("  "), None).is_err());
        assert_eq!(note.text(), "draft");
    }

    #[test]
    fn test_note_has_tag_ignores_case() {
        let note = Note::new("text", tags(&["Work"])).unwrap();
        assert!(note.has_tag("work"));
        assert!(!note.has_tag("home"));
    }

    #[test]
    fn test_note_display() {
        let note = Note::new("call mom", tags(&["family", "weekly"])).unwrap();
        assert_eq!(note.to_string(), "call mom [tags: family, weekly]");
    }

    #[test]
    fn test_note_serialization() {
        let note = Note::new("call mom", tags(&["family"])).unwrap();
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"text":"call mom","tags":["family"]}"#);
    }

    #[test]
    fn test_note_deserialization() {
        let note: Note = serde_json::from_str(r#"{"text":"plain"}"#).unwrap();
        assert!(note.tags().is_empty());

        let result: Result<Note, _> = serde_json::from_str(r#"{"text":"  "}"#);
        assert!(result.is_err());
    }
}
