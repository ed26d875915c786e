//! Command-line front end: parsing, handlers and the read-eval loop.
//!
//! Handlers return the reply text or an [`AssistantError`](crate::error::AssistantError);
//! the loop turns errors into a single `Error: ...` line so a bad command never
//! ends the session.

pub mod commands;
pub mod handlers;
pub mod note_handlers;
pub mod repl;

pub use commands::{help_text, parse_input, Command};
pub use repl::{run, Reply, Session};
