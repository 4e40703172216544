//! Contact Book - a command-line address book.
//!
//! Stores contacts with names, phone numbers and birthdays, validates every
//! value at construction, searches by name or phone fragment and persists the
//! whole book to a single JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` contact type and birthday arithmetic
//! - **book**: The `AddressBook` collection with search and pagination
//! - **storage**: Storage trait, file backend and on-disk schema
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **commands**: Front-end command parsing and execution
//! - **repl**: Interactive shell

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{days_until_birthday, Record};
pub use storage::{BookStorage, FileStorage};
