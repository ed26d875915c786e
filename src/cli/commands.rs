//! Command names, usage strings and input tokenizing.

use std::fmt;

/// A command understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Change,
    Delete,
    Search,
    ShowInfo,
    ShowAll,
    Birthdays,
    AddBirthday,
    NoteAdd,
    NoteEdit,
    NoteDelete,
    NoteList,
    NoteSearch,
    NoteTags,
    NoteByTag,
    Help,
    Exit,
}

/// Extra spellings of [`Command::Exit`].
pub const EXIT_ALIASES: &[&str] = &["quit", "close"];

impl Command {
    /// Every command, in the order shown by `help`.
    pub const ALL: [Command; 17] = [
        Command::Add,
        Command::Change,
        Command::Delete,
        Command::Search,
        Command::ShowInfo,
        Command::ShowAll,
        Command::Birthdays,
        Command::AddBirthday,
        Command::NoteAdd,
        Command::NoteEdit,
        Command::NoteDelete,
        Command::NoteList,
        Command::NoteSearch,
        Command::NoteTags,
        Command::NoteByTag,
        Command::Help,
        Command::Exit,
    ];

    /// Look up a command by its typed name, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        if EXIT_ALIASES.contains(&token.as_str()) {
            return Some(Command::Exit);
        }
        Self::ALL.into_iter().find(|command| command.name() == token)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::ShowInfo => "show-info",
            Self::ShowAll => "show-all",
            Self::Birthdays => "birthdays",
            Self::AddBirthday => "add-birthday",
            Self::NoteAdd => "note-add",
            Self::NoteEdit => "note-edit",
            Self::NoteDelete => "note-delete",
            Self::NoteList => "note-list",
            Self::NoteSearch => "note-search",
            Self::NoteTags => "note-tags",
            Self::NoteByTag => "note-by-tag",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Self::Add => "add <name> <phone> [email|None] [address|None] [DD.MM.YYYY|None]",
            Self::Change => {
                "change <name> phone <old> <new> | change <name> <email|address|birthday> <value>"
            }
            Self::Delete => "delete <name>",
            Self::Search => "search <query>",
            Self::ShowInfo => "show-info <name>",
            Self::ShowAll => "show-all",
            Self::Birthdays => "birthdays [N]",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::NoteAdd => "note-add <text...> [#tag ...]",
            Self::NoteEdit => "note-edit <n> [text...] [#tag ...]",
            Self::NoteDelete => "note-delete <n>",
            Self::NoteList => "note-list",
            Self::NoteSearch => "note-search [keywords...] [#tag ...]",
            Self::NoteTags => "note-tags",
            Self::NoteByTag => "note-by-tag <tag>",
            Self::Help => "help",
            Self::Exit => "exit | quit | close",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Add => "add a contact, or add a phone and fields to an existing one",
            Self::Change => "replace a phone or set email, address or birthday",
            Self::Delete => "remove a contact",
            Self::Search => "find contacts by name, phone or email",
            Self::ShowInfo => "show one contact",
            Self::ShowAll => "show every contact",
            Self::Birthdays => "birthdays in the next N days (default 7)",
            Self::AddBirthday => "set a contact's birthday",
            Self::NoteAdd => "add a note; words starting with # are tags",
            Self::NoteEdit => "replace the text and/or tags of note n",
            Self::NoteDelete => "remove note n",
            Self::NoteList => "show every note",
            Self::NoteSearch => "notes containing all keywords and any of the tags",
            Self::NoteTags => "list all tags",
            Self::NoteByTag => "notes with the given tag",
            Self::Help => "show this help",
            Self::Exit => "save and leave",
        }
    }

    /// Whether the command can change the address book.
    ///
    /// Note commands persist through the note service themselves.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Change | Self::Delete | Self::AddBirthday
        )
    }

    /// All typed names, aliases included, for suggestions.
    pub fn names() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .map(Command::name)
            .chain(EXIT_ALIASES.iter().copied())
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a line into a lower-cased command token and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// The text printed by `help`.
pub fn help_text() -> String {
    let width = Command::ALL
        .iter()
        .map(|command| command.usage().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Available commands:".to_string()];
    for (heading, range) in [("CONTACTS", 0..8), ("NOTES", 8..15), ("SYSTEM", 15..17)] {
        lines.push(String::new());
        lines.push(format!("{}:", heading));
        for command in &Command::ALL[range] {
            lines.push(format!(
                "  {:width$}  {}",
                command.usage(),
                command.description(),
                width = width
            ));
        }
    }
    lines.join("\n")
}
