//! The "notes" sub-language parser.
//!
//! Notes commands carry named parameters in `key/value` form, e.g.
//! `notes add t/Groceries d/milk and eggs p/high`. Values may contain
//! spaces and slashes; a new parameter only starts at a bare key token
//! immediately followed by `/`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::Command;
use crate::error::TaskpadError;
use crate::model::Priority;

use super::priority::parse_priority;
use super::{parse_index, split_first_word, validator};

// A parameter boundary: a single space followed by a bare key token
// (ASCII word characters ending in at least one lowercase letter) and a
// slash. Values are cut *before* the space, so embedded slashes and
// spaces inside a value never start a new parameter.
static PARAM_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" [0-9A-Za-z_]*[a-z]+/")
        .unwrap_or_else(|e| panic!("Invalid parameter boundary regex: {e}"))
});

/// Parse the remainder of a `notes` command into a [`Command`].
///
/// # Errors
///
/// Returns [`TaskpadError::EmptyBody`] when a required field is absent,
/// [`TaskpadError::UnknownInput`] for unrecognized sub-keywords, parameter
/// names, or priority values, and [`TaskpadError::InvalidIndex`] when a
/// delete index is not a number.
pub fn parse_notes(remainder: &str) -> Result<Command, TaskpadError> {
    let (sub_keyword, sub_remainder) = split_first_word(remainder);

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut priority: Option<Priority> = None;

    if !sub_remainder.is_empty() {
        for fragment in split_fragments(sub_remainder) {
            // Fragments without a slash carry no parameter.
            let Some((key, value)) = fragment.split_once('/') else {
                continue;
            };
            match key {
                "title" | "t" => title = Some(value.to_string()),
                "description" | "d" => description = Some(value.to_string()),
                "priority" | "p" => priority = Some(parse_priority(value)?),
                _ => {
                    return Err(TaskpadError::UnknownInput(format!(
                        "Unknown parameter name {key}"
                    )))
                }
            }
        }
    }

    match sub_keyword {
        "add" => Ok(Command::NotesAdd {
            title: validator::require(title, "title", "note")?,
            description: validator::require(description, "description", "note")?,
            priority: validator::require(priority, "priority", "note")?,
        }),
        "list" => Ok(Command::NotesList),
        "delete" => {
            let index = parse_index(sub_remainder, "note number", "note")?;
            Ok(Command::NotesDelete { index })
        }
        _ => Err(TaskpadError::UnknownInput(format!(
            "Unknown notes command: {sub_keyword}"
        ))),
    }
}

/// Split parameter text into fragments, cutting before each parameter
/// boundary. The single delimiter space is dropped; the key token and
/// everything after it stay in the fragment.
fn split_fragments(input: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for boundary in PARAM_BOUNDARY.find_iter(input) {
        fragments.push(&input[start..boundary.start()]);
        start = boundary.start() + 1;
    }
    fragments.push(&input[start..]);
    fragments
}
