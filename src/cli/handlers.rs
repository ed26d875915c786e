//! Contact command handlers.
//!
//! Each handler takes the arguments after the command name and returns the
//! reply line(s). Every value is validated before the address book changes.

use super::commands::Command;
use crate::book::{AddOutcome, AddressBook};
use crate::domain::{self, Birthday, EmailAddress, PhoneNumber};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, FieldName, FieldUpdate};
use chrono::NaiveDate;

const SEPARATOR_WIDTH: usize = 80;

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Fail unless at least `count` arguments were given.
pub(crate) fn require(args: &[String], count: usize, command: Command) -> AssistantResult<()> {
    if args.len() < count {
        return Err(AssistantError::InsufficientArguments {
            command: command.name().to_string(),
            usage: command.usage(),
        });
    }
    Ok(())
}

/// The argument at `position` unless it is missing or the literal `None`.
fn optional_arg(args: &[String], position: usize) -> Option<&str> {
    args.get(position)
        .map(String::as_str)
        .filter(|value| !value.eq_ignore_ascii_case("none"))
}

/// `add <name> <phone> [email|None] [address|None] [DD.MM.YYYY|None]`
pub fn add_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    require(args, 2, Command::Add)?;

    let name = capitalize(&args[0]);
    let phone = PhoneNumber::new(&args[1])?;

    let mut updates = Vec::new();
    if let Some(raw) = optional_arg(args, 2) {
        updates.push(FieldUpdate::Email(EmailAddress::new(raw)?));
    }
    if let Some(raw) = optional_arg(args, 3) {
        updates.push(FieldUpdate::Address(raw.to_string()));
    }
    if let Some(raw) = optional_arg(args, 4) {
        updates.push(FieldUpdate::Birthday(Birthday::new(raw)?));
    }

    if let Some(contact) = book.find_mut(&name) {
        for update in updates {
            contact.apply(update);
        }
        contact.push_phone(phone);
        return Ok(format!("Contact {} updated.", contact.name()));
    }

    let mut contact = Contact::new(name.as_str(), None, None, None)?;
    for update in updates {
        contact.apply(update);
    }
    contact.push_phone(phone);
    match book.add(contact) {
        AddOutcome::Added => Ok(format!("Contact {} added.", name)),
        AddOutcome::AlreadyExists(existing) => Err(AssistantError::InvalidArgument(format!(
            "contact '{}' already exists",
            existing
        ))),
    }
}

/// `change <name> phone <old> <new>` or `change <name> <field> <value>`
///
/// An address may span several arguments; they are joined with spaces.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    require(args, 3, Command::Change)?;

    let name = capitalize(&args[0]);
    let field = args[1].to_lowercase();
    let contact = book
        .find_mut(&name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.clone()))?;

    if field == "phone" {
        require(args, 4, Command::Change)?;
        let (old, new) = (&args[2], &args[3]);
        contact.edit_phone(old, new)?;
        return Ok(format!(
            "Phone {} of {} changed to {}.",
            old,
            contact.name(),
            new
        ));
    }

    let field: FieldName = field.parse()?;
    let value = match field {
        FieldName::Address => args[2..].join(" "),
        FieldName::Email | FieldName::Birthday => args[2].clone(),
    };
    contact.apply(FieldUpdate::parse(field, &value)?);

    Ok(format!(
        "Field {} of {} changed to {}.",
        field,
        contact.name(),
        value
    ))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    require(args, 1, Command::Delete)?;

    let name = capitalize(&args[0]);
    let removed = book
        .delete(&name)
        .ok_or(AssistantError::ContactNotFound(name))?;

    Ok(format!("Contact '{}' deleted.", removed.name()))
}

/// `search <query>`
pub fn search_contacts(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    require(args, 1, Command::Search)?;

    let query = &args[0];
    let results = book.search(query);
    if results.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let mut lines = vec![format!(
        "Search results for '{}' ({} found):",
        query,
        results.len()
    )];
    lines.extend(results.iter().map(|contact| contact.to_string()));
    Ok(lines.join("\n"))
}

/// `show-info <name>`
pub fn show_contact_info(args: &[String], book: &AddressBook) -> AssistantResult<String> {
    require(args, 1, Command::ShowInfo)?;

    let name = capitalize(&args[0]);
    book.find(&name)
        .map(Contact::to_string)
        .ok_or(AssistantError::ContactNotFound(name))
}

/// `show-all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }

    let separator = "=".repeat(SEPARATOR_WIDTH);
    let mut lines = vec![format!("Total contacts: {}", book.len()), separator.clone()];
    lines.extend(
        book.iter()
            .enumerate()
            .map(|(position, contact)| format!("{}. {}", position + 1, contact)),
    );
    lines.push(separator);
    lines.join("\n")
}

/// `birthdays [N]` relative to the current date.
pub fn show_birthdays(
    args: &[String],
    book: &AddressBook,
    default_days: i64,
) -> AssistantResult<String> {
    show_birthdays_from(args, book, domain::today(), default_days)
}

/// `birthdays [N]` relative to `today`.
pub fn show_birthdays_from(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
    default_days: i64,
) -> AssistantResult<String> {
    let days = match args.first() {
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            AssistantError::InvalidArgument(format!("number of days must be an integer: {}", raw))
        })?,
        None => default_days,
    };

    let upcoming = book.upcoming_birthdays_from(today, days)?;
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", days));
    }

    let mut lines = vec![format!(
        "Birthdays in the next {} days (weekends moved to Monday):",
        days
    )];
    lines.extend(upcoming.iter().map(ToString::to_string));
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> AssistantResult<String> {
    require(args, 2, Command::AddBirthday)?;

    let name = capitalize(&args[0]);
    let contact = book
        .find_mut(&name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.clone()))?;

    let birthday = Birthday::new(&args[1])?;
    contact.apply(FieldUpdate::Birthday(birthday));

    Ok(format!("Birthday of '{}' set to {}.", contact.name(), birthday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ann"), "Ann");
        assert_eq!(capitalize("mARY"), "Mary");
        assert_eq!(capitalize("олена"), "Олена");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_optional_arg_none_literal() {
        let values = args(&["Ann", "0501234567", "None", "nONe"]);
        assert_eq!(optional_arg(&values, 1), Some("0501234567"));
        assert_eq!(optional_arg(&values, 2), None);
        assert_eq!(optional_arg(&values, 3), None);
        assert_eq!(optional_arg(&values, 9), None);
    }

    #[test]
    fn test_add_contact_new_and_existing() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["ann", "0501234567"]), &mut book).unwrap();
        assert_eq!(reply, "Contact Ann added.");
        assert_eq!(book.len(), 1);

        let reply = add_contact(
            &args(&["ANN", "0671234567", "ann@mail.com", "None", "01.01.1990"]),
            &mut book,
        )
        .unwrap();
        assert_eq!(reply, "Contact Ann updated.");
        assert_eq!(book.len(), 1);

        let ann = book.find("ann").unwrap();
        assert_eq!(ann.phones().len(), 2);
        assert_eq!(ann.email().unwrap().as_str(), "ann@mail.com");
        assert!(ann.address().is_none());
        assert_eq!(ann.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_add_contact_invalid_value_changes_nothing() {
        let mut book = AddressBook::new();
        let result = add_contact(&args(&["Ann", "0501234567", "bad-email"]), &mut book);
        assert!(matches!(result, Err(AssistantError::Validation(_))));
        assert!(book.is_empty());

        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();
        let result = add_contact(
            &args(&["Ann", "0671234567", "ann@mail.com", "None", "99.99.1990"]),
            &mut book,
        );
        assert!(result.is_err());
        let ann = book.find("Ann").unwrap();
        assert_eq!(ann.phones().len(), 1);
        assert!(ann.email().is_none());
    }

    #[test]
    fn test_add_contact_missing_arguments() {
        let mut book = AddressBook::new();
        let err = add_contact(&args(&["Ann"]), &mut book).unwrap_err();
        assert!(err.to_string().starts_with("Not enough arguments for add."));
    }

    #[test]
    fn test_change_phone_and_fields() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();

        let reply =
            change_contact(&args(&["ann", "phone", "0501234567", "0671112233"]), &mut book).unwrap();
        assert_eq!(reply, "Phone 0501234567 of Ann changed to 0671112233.");

        change_contact(&args(&["Ann", "address", "Main", "St", "5"]), &mut book).unwrap();
        assert_eq!(book.find("Ann").unwrap().address(), Some("Main St 5"));

        let reply = change_contact(&args(&["Ann", "EMAIL", "a@b.com"]), &mut book).unwrap();
        assert_eq!(reply, "Field email of Ann changed to a@b.com.");
    }

    #[test]
    fn test_change_errors() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();

        let err = change_contact(&args(&["Bob", "email", "a@b.com"]), &mut book).unwrap_err();
        assert!(matches!(err, AssistantError::ContactNotFound(name) if name == "Bob"));

        let err = change_contact(&args(&["Ann", "name", "Bob"]), &mut book).unwrap_err();
        assert!(matches!(err, AssistantError::UnsupportedField(_)));

        let err = change_contact(&args(&["Ann", "phone", "0501234567"]), &mut book).unwrap_err();
        assert!(matches!(err, AssistantError::InsufficientArguments { .. }));

        let err =
            change_contact(&args(&["Ann", "phone", "0000000000", "0671112233"]), &mut book)
                .unwrap_err();
        assert!(matches!(err, AssistantError::PhoneNotFound(_)));
    }

    #[test]
    fn test_delete_and_show_info() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();

        assert_eq!(
            show_contact_info(&args(&["ann"]), &book).unwrap(),
            "Name: Ann, Phones: 0501234567"
        );
        assert_eq!(
            delete_contact(&args(&["ANN"]), &mut book).unwrap(),
            "Contact 'Ann' deleted."
        );
        assert!(delete_contact(&args(&["Ann"]), &mut book).is_err());
        assert!(show_contact_info(&args(&["Ann"]), &book).is_err());
    }

    #[test]
    fn test_search_and_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "Address book is empty.");

        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();
        add_contact(&args(&["Bob", "0679998877"]), &mut book).unwrap();

        let reply = search_contacts(&args(&["123"]), &book).unwrap();
        assert_eq!(
            reply,
            "Search results for '123' (1 found):\nName: Ann, Phones: 0501234567"
        );
        assert_eq!(
            search_contacts(&args(&["555"]), &book).unwrap(),
            "No contacts found."
        );

        let all = show_all(&book);
        assert!(all.starts_with("Total contacts: 2\n"));
        assert!(all.contains("1. Name: Ann"));
        assert!(all.contains("2. Name: Bob"));
    }

    #[test]
    fn test_show_birthdays_window() {
        let today = NaiveDate::from_ymd_opt(2021, 12, 27).unwrap();
        let mut book = AddressBook::new();
        add_contact(
            &args(&["Ann", "0501234567", "None", "None", "01.01.1990"]),
            &mut book,
        )
        .unwrap();

        let reply = show_birthdays_from(&[], &book, today, 7).unwrap();
        assert_eq!(
            reply,
            "Birthdays in the next 7 days (weekends moved to Monday):\nAnn: 03.01.2022 (Monday)"
        );
        assert_eq!(
            show_birthdays_from(&args(&["2"]), &book, today, 7).unwrap(),
            "No birthdays in the next 2 days."
        );
        assert!(matches!(
            show_birthdays_from(&args(&["abc"]), &book, today, 7),
            Err(AssistantError::InvalidArgument(_))
        ));
        assert!(matches!(
            show_birthdays_from(&args(&["-1"]), &book, today, 7),
            Err(AssistantError::Validation(_))
        ));
    }

    #[test]
    fn test_add_birthday() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Ann", "0501234567"]), &mut book).unwrap();

        let reply = add_birthday(&args(&["ann", "15.05.1990"]), &mut book).unwrap();
        assert_eq!(reply, "Birthday of 'Ann' set to 15.05.1990.");
        assert!(add_birthday(&args(&["Ann", "1990-05-15"]), &mut book).is_err());
        assert!(add_birthday(&args(&["Bob", "15.05.1990"]), &mut book).is_err());
    }
}
