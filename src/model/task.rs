//! Task variants tracked by the task list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three kinds of task a user can add.
///
/// A `Deadline` carries a parsed calendar date; an `Event` stores its
/// date/time payload verbatim as free text. The asymmetry is deliberate:
/// deadlines are validated ISO-8601 dates, event times are whatever the
/// user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Task {
    /// A plain todo with no schedule.
    Todo {
        description: String,
        #[serde(default)]
        done: bool,
    },
    /// A task due by a specific calendar date.
    Deadline {
        description: String,
        date: NaiveDate,
        #[serde(default)]
        done: bool,
    },
    /// A task happening at a free-text date/time.
    Event {
        description: String,
        date_time_text: String,
        #[serde(default)]
        done: bool,
    },
}

impl Task {
    /// The task's description, without any schedule payload.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Todo { description, .. }
            | Self::Deadline { description, .. }
            | Self::Event { description, .. } => description,
        }
    }

    /// Whether the task has been marked done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        match self {
            Self::Todo { done, .. } | Self::Deadline { done, .. } | Self::Event { done, .. } => {
                *done
            }
        }
    }

    /// Mark the task as done.
    pub fn mark_done(&mut self) {
        match self {
            Self::Todo { done, .. } | Self::Deadline { done, .. } | Self::Event { done, .. } => {
                *done = true;
            }
        }
    }

    /// One-letter tag used in listings: T, D, or E.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Todo { .. } => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_done() { 'X' } else { ' ' };
        match self {
            Self::Todo { description, .. } => {
                write!(f, "[T][{mark}] {description}")
            }
            Self::Deadline {
                description, date, ..
            } => {
                write!(f, "[D][{mark}] {description} (by: {})", date.format("%b %-d %Y"))
            }
            Self::Event {
                description,
                date_time_text,
                ..
            } => {
                write!(f, "[E][{mark}] {description} (at: {date_time_text})")
            }
        }
    }
}

/// The stored type tag of an Add command, before deep validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Todo,
    Deadline,
    Event,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        })
    }
}
