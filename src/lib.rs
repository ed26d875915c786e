//! Personal assistant - a command-line address book and note keeper.
//!
//! Contacts carry validated phones, email, address and birthday; notes carry
//! free text and tags. Both collections live in JSON files under a storage
//! directory and are edited through an interactive command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone, email, birthday)
//! - **models**: Contact and note records
//! - **book**: In-memory address book, birthday scheduling and note book
//! - **repositories**: JSON file persistence behind repository traits
//! - **services**: Collections bound to their storage
//! - **matching**: Fuzzy command-name suggestions
//! - **cli**: Command parsing, handlers and the read-eval loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use book::{AddOutcome, AddressBook, NoteBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, EmailAddress, PhoneNumber, ValidationError};
pub use error::{AssistantError, AssistantResult, ConfigError, StorageError};
pub use models::{Contact, FieldName, FieldUpdate, Note};
pub use services::{ContactService, NoteService};
