//! Interactive read-eval-print loop.

use crate::book::AddressBook;
use crate::commands::{execute, parse_command, Command, Outcome};
use crate::config::Config;
use crate::storage::BookStorage;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error, warn};

const PROMPT: &str = "contacts> ";

/// Load the saved book at startup.
///
/// Returns whether the book may be saved automatically on exit. When the
/// stored file cannot be read the error is reported, the book stays empty and
/// `false` is returned, so the unreadable file is only replaced by an explicit
/// `save`.
pub fn restore_book<S: BookStorage>(book: &mut AddressBook<S>) -> bool {
    match book.load() {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Failed to load address book");
            eprintln!("Error: failed to load address book: {e}");
            eprintln!(
                "Starting with an empty book. It will not be saved on exit unless you run 'save'."
            );
            false
        }
    }
}

/// Run the REPL until `exit` or end of input, then save the book.
///
/// Command errors are printed and the loop keeps going. A failed final save
/// is reported but does not prevent the loop from returning. With
/// `autosave` off the final save is skipped until a `save` command succeeds.
pub fn run_repl<S: BookStorage>(
    book: &mut AddressBook<S>,
    config: &Config,
    mut autosave: bool,
) -> Result<(), ReadlineError> {
    println!("Contact book - type 'help' for commands, 'exit' to quit");

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                let today = chrono::Local::now().date_naive();
                let outcome = parse_command(line).and_then(|command| {
                    let is_save = matches!(command, Command::Save);
                    let outcome = execute(command, book, config, today)?;
                    autosave |= is_save;
                    Ok(outcome)
                });
                match outcome {
                    Ok(Outcome::Continue(text)) => {
                        if !text.is_empty() {
                            println!("{text}");
                        }
                    }
                    Ok(Outcome::Exit) => break,
                    Err(e) => {
                        debug!(error = ?e, "Command failed");
                        eprintln!("Error: {e}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use 'exit' to quit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                save_on_exit(book, autosave);
                return Err(err);
            }
        }
    }

    save_on_exit(book, autosave);
    println!("Goodbye!");
    Ok(())
}

fn save_on_exit<S: BookStorage>(book: &AddressBook<S>, autosave: bool) {
    if !autosave {
        warn!("Skipping save on exit, the stored book was not loaded");
        return;
    }
    if let Err(e) = book.save() {
        warn!(error = %e, "Failed to save address book on exit");
        eprintln!("Error: failed to save address book: {e}");
    }
}
