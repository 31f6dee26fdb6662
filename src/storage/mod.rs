//! Persistence of list state.
//!
//! Both lists are stored together as one JSON document in
//! `~/.taskpad/state.json`. A missing file means a fresh start; a corrupt
//! file is an error rather than a silent reset.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TaskpadError;
use crate::list::{NoteList, TaskList};

/// The persisted document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct State {
    tasks: TaskList,
    notes: NoteList,
}

/// Manages the on-disk state file.
pub struct Storage {
    state_file: PathBuf,
}

impl Storage {
    /// Create storage rooted at the given paths.
    #[must_use]
    pub fn new(paths: &Paths) -> Self {
        Self {
            state_file: paths.state_file.clone(),
        }
    }

    /// Create storage with a custom state file (for testing).
    #[must_use]
    pub fn with_file(state_file: PathBuf) -> Self {
        Self { state_file }
    }

    /// Load both lists. A missing state file yields empty lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<(TaskList, NoteList), TaskpadError> {
        if !self.state_file.exists() {
            return Ok((TaskList::new(), NoteList::new()));
        }

        let content = std::fs::read_to_string(&self.state_file).map_err(TaskpadError::Io)?;
        let state: State = serde_json::from_str(&content)
            .map_err(|e| TaskpadError::Storage(format!("Failed to parse state file: {e}")))?;

        Ok((state.tasks, state.notes))
    }

    /// Save both lists, replacing the previous state file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, tasks: &TaskList, notes: &NoteList) -> Result<(), TaskpadError> {
        let state = State {
            tasks: tasks.clone(),
            notes: notes.clone(),
        };
        let content = serde_json::to_string_pretty(&state)
            .map_err(|e| TaskpadError::Storage(format!("Failed to serialize state: {e}")))?;

        std::fs::write(&self.state_file, content).map_err(TaskpadError::Io)?;
        Ok(())
    }
}
