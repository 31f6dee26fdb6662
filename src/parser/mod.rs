//! Parsing of raw input lines into executable commands.
//!
//! The top-level parser splits a line into a keyword and a remainder and
//! dispatches over a closed set of command keywords. The `notes` keyword
//! hands off to the sub-language parser in [`notes`].
//!
//! Parsing for `todo`/`deadline`/`event` always succeeds structurally; the
//! deep checks (separator presence, date validity) happen when the command
//! executes. Keep that split: a structurally valid line should produce a
//! command even when its payload turns out to be bad.

pub mod notes;
pub mod priority;
pub mod validator;

pub use priority::parse_priority;

use crate::command::Command;
use crate::error::TaskpadError;
use crate::model::TaskType;

/// Parse one input line into a [`Command`].
///
/// # Errors
///
/// Returns [`TaskpadError::EmptyBody`] when a required index is absent,
/// [`TaskpadError::InvalidIndex`] when an index token is not a number, and
/// [`TaskpadError::UnknownInput`] for unrecognized keywords.
///
/// # Examples
///
/// ```
/// use taskpad::parser::parse;
/// use taskpad::command::Command;
///
/// let command = parse("delete 2").unwrap();
/// assert_eq!(command, Command::Delete { index: 2 });
///
/// assert!(parse("frobnicate").is_err());
/// ```
pub fn parse(line: &str) -> Result<Command, TaskpadError> {
    let (keyword, remainder) = split_first_word(line);

    match keyword {
        "bye" => Ok(Command::Exit),
        "list" => Ok(Command::List),
        "delete" => {
            let index = parse_index(remainder, "task number", "task")?;
            Ok(Command::Delete { index })
        }
        "done" => {
            let index = parse_index(remainder, "task number", "task")?;
            Ok(Command::Done { index })
        }
        "todo" => Ok(Command::Add {
            task_type: TaskType::Todo,
            raw_description: remainder.to_string(),
        }),
        "deadline" => Ok(Command::Add {
            task_type: TaskType::Deadline,
            raw_description: remainder.to_string(),
        }),
        "event" => Ok(Command::Add {
            task_type: TaskType::Event,
            raw_description: remainder.to_string(),
        }),
        "find" => Ok(Command::Find {
            query: remainder.to_string(),
        }),
        "notes" => notes::parse_notes(remainder),
        _ => Err(TaskpadError::UnknownInput(keyword.to_string())),
    }
}

/// Split a line on the first whitespace run into `(keyword, remainder)`.
/// The remainder is the empty string when the line is a single word.
pub(crate) fn split_first_word(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], line[at..].trim_start()),
        None => (line, ""),
    }
}

/// Parse a 1-based index token. An empty token is an empty-body failure;
/// a non-numeric token is an invalid-index failure, never a panic.
pub(crate) fn parse_index(
    token: &str,
    field: &str,
    context: &str,
) -> Result<usize, TaskpadError> {
    if token.is_empty() {
        return Err(TaskpadError::empty_body(field, context));
    }
    token
        .parse::<usize>()
        .map_err(|_| TaskpadError::InvalidIndex(token.to_string()))
}
