//! Application service layer.
//!
//! Services own the in-memory collections and decide when they are written
//! back. They provide a clean boundary between the command handlers and the
//! data access layer.

mod contact_service;
mod note_service;

pub use contact_service::ContactService;
pub use note_service::NoteService;
