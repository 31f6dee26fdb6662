//! Notes with a title, body, and priority.

use serde::{Deserialize, Serialize};

use super::Priority;

/// A note. All three fields are required at construction; a note is never
/// built with a missing title, description, or priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Note {
    #[must_use]
    pub fn new(title: String, description: String, priority: Priority) -> Self {
        Self {
            title,
            description,
            priority,
        }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.priority, self.title, self.description
        )
    }
}
