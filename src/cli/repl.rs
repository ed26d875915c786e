//! The interactive command loop.

use super::commands::{help_text, parse_input, Command};
use super::{handlers, note_handlers};
use crate::error::{AssistantError, AssistantResult};
use crate::matching::CommandMatcher;
use crate::services::{ContactService, NoteService};
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

pub const PROMPT: &str = "> ";
pub const GREETING: &str = "Personal assistant started. Type 'help' for the list of commands.";
pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

/// Contacts, notes and settings shared by every command.
pub struct Session<'a> {
    contacts: &'a mut ContactService,
    notes: &'a mut NoteService,
    birthday_days: i64,
    matcher: CommandMatcher,
}

impl<'a> Session<'a> {
    pub fn new(
        contacts: &'a mut ContactService,
        notes: &'a mut NoteService,
        birthday_days: i64,
    ) -> Self {
        Self {
            contacts,
            notes,
            birthday_days,
            matcher: CommandMatcher::new(),
        }
    }

    /// Run one input line. Blank lines produce no reply.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        let (token, args) = parse_input(line)?;

        let Some(command) = Command::parse(&token) else {
            return Some(Reply::Continue(self.unknown_command(&token)));
        };
        debug!(command = %command, args = args.len(), "Executing command");

        if command == Command::Exit {
            return Some(Reply::Exit(self.shutdown()));
        }

        let mut reply = match self.dispatch(command, &args) {
            Ok(text) => text,
            Err(e) => {
                if let AssistantError::Storage(ref storage) = e {
                    error!(command = %command, error = %storage, "Failed to save notes");
                }
                format!("Error: {}", e)
            }
        };

        if command.is_mutating() {
            if let Err(e) = self.contacts.save() {
                error!(command = %command, error = %e, "Failed to save contacts");
                reply.push_str(&format!("\nWarning: contacts were not saved: {}", e));
            }
        }

        Some(Reply::Continue(reply))
    }

    fn dispatch(&mut self, command: Command, args: &[String]) -> AssistantResult<String> {
        let book = self.contacts.book_mut();
        match command {
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Delete => handlers::delete_contact(args, book),
            Command::Search => handlers::search_contacts(args, book),
            Command::ShowInfo => handlers::show_contact_info(args, book),
            Command::ShowAll => Ok(handlers::show_all(book)),
            Command::Birthdays => handlers::show_birthdays(args, book, self.birthday_days),
            Command::AddBirthday => handlers::add_birthday(args, book),
            Command::NoteAdd => note_handlers::add_note(args, self.notes),
            Command::NoteEdit => note_handlers::edit_note(args, self.notes),
            Command::NoteDelete => note_handlers::delete_note(args, self.notes),
            Command::NoteList => Ok(note_handlers::list_notes(self.notes)),
            Command::NoteSearch => Ok(note_handlers::search_notes(args, self.notes)),
            Command::NoteTags => Ok(note_handlers::list_tags(self.notes)),
            Command::NoteByTag => note_handlers::notes_by_tag(args, self.notes),
            Command::Help => Ok(help_text()),
            Command::Exit => Ok(self.shutdown()),
        }
    }

    fn unknown_command(&self, token: &str) -> String {
        match self.matcher.suggest(token, &Command::names()) {
            Some(suggestion) => format!(
                "Unknown command '{}'. Did you mean '{}'?",
                token, suggestion
            ),
            None => format!(
                "Unknown command '{}'. Type 'help' for the list of commands.",
                token
            ),
        }
    }

    /// Save both collections and return the farewell text.
    pub fn shutdown(&mut self) -> String {
        let mut lines = Vec::new();
        if let Err(e) = self.contacts.save() {
            error!(error = %e, "Failed to save contacts on exit");
            lines.push(format!("Warning: contacts were not saved: {}", e));
        }
        if let Err(e) = self.notes.save() {
            error!(error = %e, "Failed to save notes on exit");
            lines.push(format!("Warning: notes were not saved: {}", e));
        }
        lines.push(FAREWELL.to_string());
        lines.join("\n")
    }
}

/// Read commands from `input` until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    session: &mut Session<'_>,
) -> io::Result<()> {
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            writeln!(output, "{}", session.shutdown())?;
            return Ok(());
        }

        match session.execute(&line) {
            Some(Reply::Continue(text)) => writeln!(output, "{}", text)?,
            Some(Reply::Exit(text)) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
            None => {}
        }
    }
}
