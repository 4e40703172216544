//! Command parsing and execution for the interactive front-end.
//!
//! A line is split into words (double quotes group words, so names may
//! contain spaces), parsed into a [`Command`], then executed against an
//! [`AddressBook`]. Execution returns the text to print instead of printing
//! it, which keeps this module free of I/O.

use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::Phone;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::Record;
use crate::storage::BookStorage;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("Failed to compile token regex"));

/// Printed by the `help` command.
pub const HELP: &str = "\
Commands:
  add <name> [phone...]          create a contact or add phones to it
  phone <name> <phone>           add a phone to an existing contact
  edit <name> <old> <new>        replace a phone number
  remove <name> <phone>          remove a phone number
  birthday <name> <YYYY.MM.DD>   set a contact's birthday
  clear-birthday <name>          remove a contact's birthday
  days <name>                    days until a contact's birthday
  upcoming [days]                birthdays within the next N days
  show <name>                    show one contact
  search <query>                 find contacts by name or phone fragment
  delete <name>                  delete a contact
  list [page_size]               list all contacts page by page
  save                           save the address book
  help                           show this message
  exit | quit | close            save and quit

Quote names that contain spaces: add \"Mary Ann\" 0501234567";

/// A parsed front-end command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phones: Vec<String> },
    Phone { name: String, phone: String },
    Edit { name: String, old: String, new: String },
    Remove { name: String, phone: String },
    Birthday { name: String, date: String },
    ClearBirthday { name: String },
    Days { name: String },
    Upcoming { days: Option<u32> },
    Show { name: String },
    Search { query: String },
    Delete { name: String },
    List { page_size: Option<usize> },
    Save,
    Help,
    Exit,
}

/// What the front-end should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (if any) and read the next command.
    Continue(String),
    /// Save and terminate.
    Exit,
}

/// Split a line into words, honouring double quotes.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one input line.
///
/// # Errors
///
/// - `CommandError::UnknownCommand` for an unrecognised first word
/// - `CommandError::Usage` when the arguments do not fit the command
pub fn parse_command(line: &str) -> CommandResult<Command> {
    let tokens = tokenize(line);
    let Some((head, args)) = tokens.split_first() else {
        return Err(CommandError::Usage("type 'help' for available commands".to_string()));
    };

    let command = match head.to_lowercase().as_str() {
        "add" => match args {
            [name, phones @ ..] => Command::Add {
                name: name.clone(),
                phones: phones.to_vec(),
            },
            _ => return Err(usage("add <name> [phone...]")),
        },
        "phone" => match args {
            [name, phone] => Command::Phone {
                name: name.clone(),
                phone: phone.clone(),
            },
            _ => return Err(usage("phone <name> <phone>")),
        },
        "edit" => match args {
            [name, old, new] => Command::Edit {
                name: name.clone(),
                old: old.clone(),
                new: new.clone(),
            },
            _ => return Err(usage("edit <name> <old> <new>")),
        },
        "remove" => match args {
            [name, phone] => Command::Remove {
                name: name.clone(),
                phone: phone.clone(),
            },
            _ => return Err(usage("remove <name> <phone>")),
        },
        "birthday" => match args {
            [name, date] => Command::Birthday {
                name: name.clone(),
                date: date.clone(),
            },
            _ => return Err(usage("birthday <name> <YYYY.MM.DD>")),
        },
        "clear-birthday" => match args {
            [name] => Command::ClearBirthday { name: name.clone() },
            _ => return Err(usage("clear-birthday <name>")),
        },
        "days" => match args {
            [name] => Command::Days { name: name.clone() },
            _ => return Err(usage("days <name>")),
        },
        "upcoming" => match args {
            [] => Command::Upcoming { days: None },
            [days] => Command::Upcoming {
                days: Some(days.parse().map_err(|_| usage("upcoming [days]"))?),
            },
            _ => return Err(usage("upcoming [days]")),
        },
        "show" => match args {
            [name] => Command::Show { name: name.clone() },
            _ => return Err(usage("show <name>")),
        },
        "search" | "find" => {
            if args.is_empty() {
                return Err(usage("search <query>"));
            }
            Command::Search {
                query: args.join(" "),
            }
        }
        "delete" => match args {
            [name] => Command::Delete { name: name.clone() },
            _ => return Err(usage("delete <name>")),
        },
        "list" => match args {
            [] => Command::List { page_size: None },
            [size] => Command::List {
                page_size: Some(size.parse().map_err(|_| usage("list [page_size]"))?),
            },
            _ => return Err(usage("list [page_size]")),
        },
        "save" => Command::Save,
        "help" | "?" => Command::Help,
        "exit" | "quit" | "close" => Command::Exit,
        _ => return Err(CommandError::UnknownCommand(head.clone())),
    };

    Ok(command)
}

fn usage(text: &str) -> CommandError {
    CommandError::Usage(text.to_string())
}

/// Run a command against the book.
///
/// `today` anchors the birthday commands so they can be tested with a fixed
/// date.
pub fn execute<S: BookStorage>(
    command: Command,
    book: &mut AddressBook<S>,
    config: &Config,
    today: NaiveDate,
) -> CommandResult<Outcome> {
    let output = match command {
        Command::Add { name, phones } => {
            // Validate everything first so a bad number leaves the book untouched.
            let phones = phones
                .iter()
                .map(Phone::new)
                .collect::<Result<Vec<_>, _>>()?;

            let message = match book.get_mut(&name) {
                Some(record) => {
                    for phone in phones {
                        record.push_phone(phone);
                    }
                    "Contact updated."
                }
                None => {
                    let mut record = Record::new(&name)?;
                    for phone in phones {
                        record.push_phone(phone);
                    }
                    book.add_record(record);
                    "Contact added."
                }
            };
            message.to_string()
        }
        Command::Phone { name, phone } => {
            book.require_mut(&name)?.add_phone(&phone)?;
            "Phone added.".to_string()
        }
        Command::Edit { name, old, new } => {
            book.require_mut(&name)?.edit_phone(&old, &new)?;
            "Phone updated.".to_string()
        }
        Command::Remove { name, phone } => {
            book.require_mut(&name)?.remove_phone(&phone);
            "Phone removed.".to_string()
        }
        Command::Birthday { name, date } => {
            book.require_mut(&name)?.set_birthday(&date)?;
            "Birthday set.".to_string()
        }
        Command::ClearBirthday { name } => {
            book.require_mut(&name)?.clear_birthday();
            "Birthday cleared.".to_string()
        }
        Command::Days { name } => {
            let record = book
                .get(&name)
                .ok_or_else(|| BookError::RecordNotFound(name.clone()))?;
            let name = record.name();
            match record.days_to_birthday(today) {
                Some(0) => format!("{name}'s birthday is today!"),
                Some(1) => format!("1 day until {name}'s birthday."),
                Some(days) => format!("{days} days until {name}'s birthday."),
                None => format!("{name} has no birthday set."),
            }
        }
        Command::Upcoming { days } => {
            let window = i64::from(days.unwrap_or(config.upcoming_days));
            let upcoming = book.upcoming_birthdays(window, today);
            if upcoming.is_empty() {
                "No upcoming birthdays.".to_string()
            } else {
                upcoming
                    .iter()
                    .map(|(record, days)| format!("{days:>3} days: {record}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Show { name } => book
            .get(&name)
            .ok_or_else(|| BookError::RecordNotFound(name.clone()))?
            .to_string(),
        Command::Search { query } => {
            let results = book.find(&query);
            if results.is_empty() {
                "No records found.".to_string()
            } else {
                results
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Delete { name } => match book.delete(&name) {
            Some(_) => "Contact deleted.".to_string(),
            None => format!("No contact named {name}."),
        },
        Command::List { page_size } => {
            let pages: Vec<String> = book
                .paginate(page_size.unwrap_or(config.page_size))?
                .collect();
            if pages.is_empty() {
                "Address book is empty.".to_string()
            } else {
                pages.join("\n\n")
            }
        }
        Command::Save => {
            book.save().map_err(BookError::from)?;
            "Address book saved.".to_string()
        }
        Command::Help => HELP.to_string(),
        Command::Exit => return Ok(Outcome::Exit),
    };

    Ok(Outcome::Continue(output))
}
