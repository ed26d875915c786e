//! Data models for the personal assistant.
//!
//! This module contains the records held by the two collections: contacts
//! and notes.

pub mod contact;
pub mod note;

pub use contact::{Contact, FieldName, FieldUpdate};
pub use note::Note;
