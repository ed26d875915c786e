//! Note command handlers.
//!
//! Words starting with `#` are tags; everything else is text. Notes are
//! numbered from 1 in commands and listings.

use super::commands::Command;
use super::handlers::require;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Note;
use crate::services::NoteService;

/// Split arguments into text words and `#tag` names (without the `#`).
///
/// A lone `#` is kept as text.
pub fn split_tags(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut words = Vec::new();
    let mut tags = Vec::new();

    for arg in args {
        match arg.strip_prefix('#') {
            Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
            _ => words.push(arg.clone()),
        }
    }

    (words, tags)
}

/// Parse a 1-based note number into a 0-based position.
fn note_position(raw: &str) -> AssistantResult<usize> {
    match raw.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(AssistantError::InvalidArgument(format!(
            "note number must be a positive integer: {}",
            raw
        ))),
    }
}

/// Numbered listing, or `empty` when there is nothing to show.
fn format_notes<'a>(notes: impl IntoIterator<Item = &'a Note>, empty: &str) -> String {
    let lines: Vec<String> = notes
        .into_iter()
        .enumerate()
        .map(|(position, note)| format!("{}. {}", position + 1, note))
        .collect();

    if lines.is_empty() {
        empty.to_string()
    } else {
        lines.join("\n")
    }
}

/// `note-add <text...> [#tag ...]`
pub fn add_note(args: &[String], notes: &mut NoteService) -> AssistantResult<String> {
    let (words, tags) = split_tags(args);
    let position = notes.create(&words.join(" "), tags)?;
    Ok(format!("Note #{} added.", position + 1))
}

/// `note-edit <n> [text...] [#tag ...]`
///
/// Text and tags that are not given stay as they are.
pub fn edit_note(args: &[String], notes: &mut NoteService) -> AssistantResult<String> {
    require(args, 2, Command::NoteEdit)?;

    let position = note_position(&args[0])?;
    let (words, tags) = split_tags(&args[1..]);
    let new_text = (!words.is_empty()).then(|| words.join(" "));
    let new_tags = (!tags.is_empty()).then_some(tags);

    notes.update(position, new_text.as_deref(), new_tags)?;
    Ok(format!("Note #{} updated.", position + 1))
}

/// `note-delete <n>`
pub fn delete_note(args: &[String], notes: &mut NoteService) -> AssistantResult<String> {
    require(args, 1, Command::NoteDelete)?;

    let position = note_position(&args[0])?;
    let removed = notes.delete(position)?;
    Ok(format!("Note #{} deleted: {}", position + 1, removed.text()))
}

/// `note-list`
pub fn list_notes(notes: &NoteService) -> String {
    format_notes(notes.list(), "No notes yet.")
}

/// `note-search [keywords...] [#tag ...]`
pub fn search_notes(args: &[String], notes: &NoteService) -> String {
    let (keywords, tags) = split_tags(args);
    format_notes(notes.search(&keywords, &tags), "No matching notes.")
}

/// `note-tags`
pub fn list_tags(notes: &NoteService) -> String {
    let tags = notes.all_tags();
    if tags.is_empty() {
        return "No tags yet.".to_string();
    }
    format!("All tags: {}", tags.join(", "))
}

/// `note-by-tag <tag>`; a leading `#` is optional.
pub fn notes_by_tag(args: &[String], notes: &NoteService) -> AssistantResult<String> {
    require(args, 1, Command::NoteByTag)?;

    let tag = args[0].trim_start_matches('#');
    Ok(format_notes(
        notes.by_tag(tag),
        &format!("No notes tagged '{}'.", tag),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_split_tags() {
        let (words, tags) = split_tags(&args(&["Buy", "#shop", "milk", "#", "#urgent"]));
        assert_eq!(words, ["Buy", "milk", "#"]);
        assert_eq!(tags, ["shop", "urgent"]);
    }

    #[test]
    fn test_note_position() {
        assert_eq!(note_position("1").unwrap(), 0);
        assert_eq!(note_position("12").unwrap(), 11);
        assert!(note_position("0").is_err());
        assert!(note_position("-1").is_err());
        assert!(note_position("one").is_err());
    }

    #[test]
    fn test_format_notes() {
        let notes = vec![
            Note::new("Buy milk", vec!["shop".to_string()]).unwrap(),
            Note::new("Call mom", Vec::new()).unwrap(),
        ];
        assert_eq!(
            format_notes(&notes, "none"),
            "1. Buy milk [tags: shop]\n2. Call mom"
        );
        assert_eq!(format_notes(&Vec::<Note>::new(), "none"), "none");
    }
}
