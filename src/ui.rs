//! Console rendering of messages and errors.

use std::io::Write;

use colored::Colorize;

use crate::error::TaskpadError;

/// Renders strings to the user. Commands never print; they return text and
/// the Ui puts it on the console.
#[derive(Debug, Default)]
pub struct Ui;

impl Ui {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn banner(&self, greeting: Option<&str>) {
        match greeting {
            Some(text) => println!("{text}"),
            None => {
                println!("{}", "taskpad".bold());
                println!("What can I do for you? (type 'bye' to quit)");
            }
        }
    }

    /// Print the prompt without a trailing newline.
    pub fn prompt(&self) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    /// Show a command's confirmation or listing.
    pub fn show(&self, message: &str) {
        println!("{message}");
    }

    /// Report an error without ending the session.
    pub fn show_error(&self, error: &TaskpadError) {
        eprintln!("{}: {error}", "error".red().bold());
    }
}
