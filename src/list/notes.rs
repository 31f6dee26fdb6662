//! The note list.

use serde::{Deserialize, Serialize};

use crate::error::TaskpadError;
use crate::model::Note;

/// The mutable collection of notes. Positions are 1-based, matching the
/// numbering shown in listings.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterate over notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Append a note and return the confirmation shown to the user.
    pub fn create(&mut self, note: Note) -> String {
        let rendered = note.to_string();
        self.notes.push(note);
        format!(
            "Got it. I've added this note:\n  {rendered}\n{}",
            self.count_line()
        )
    }

    /// Remove the note at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskpadError::OutOfRange`] when the position does not
    /// refer to a note.
    pub fn remove(&mut self, index: usize) -> Result<String, TaskpadError> {
        let at = index
            .checked_sub(1)
            .filter(|&i| i < self.notes.len())
            .ok_or(TaskpadError::OutOfRange(index))?;
        let removed = self.notes.remove(at);
        Ok(format!(
            "Noted. I've removed this note:\n  {removed}\n{}",
            self.count_line()
        ))
    }

    fn count_line(&self) -> String {
        let noun = if self.notes.len() == 1 { "note" } else { "notes" };
        format!("Now you have {} {noun}.", self.notes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn note(title: &str) -> Note {
        Note::new(title.to_string(), "body".to_string(), Priority::Low)
    }

    #[test]
    fn test_create_and_count() {
        let mut list = NoteList::new();
        let message = list.create(note("Groceries"));
        assert!(message.contains("Groceries"));
        assert!(message.contains("1 note."));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_is_one_based() {
        let mut list = NoteList::new();
        list.create(note("a"));
        list.create(note("b"));
        list.remove(1).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().map(|n| n.title.as_str()), Some("b"));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = NoteList::new();
        assert!(matches!(
            list.remove(1).unwrap_err(),
            TaskpadError::OutOfRange(1)
        ));
    }
}
