//! Core data types: tasks, notes, and priorities.

pub mod note;
pub mod task;

pub use note::Note;
pub use task::{Task, TaskType};

use serde::{Deserialize, Serialize};

/// Priority levels for notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority (low or l)
    Low,
    /// Medium priority (medium or m)
    Medium,
    /// High priority (high or h)
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}
