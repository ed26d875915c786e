//! In-memory collections.
//!
//! The address book owns contact uniqueness, lookup, search and birthday
//! scheduling; the note book is a plain ordered list with tag queries.

pub mod address_book;
pub mod birthdays;
pub mod note_book;

pub use address_book::{AddOutcome, AddressBook};
pub use birthdays::UpcomingBirthday;
pub use note_book::NoteBook;
