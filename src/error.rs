//! Error types for taskpad.

use thiserror::Error;

/// All errors that can occur while parsing or executing a command.
#[derive(Debug, Error)]
pub enum TaskpadError {
    /// A required field or separator was absent from the input.
    #[error("The {field} of a {context} cannot be empty.")]
    EmptyBody {
        /// Name of the missing field (e.g. "task number").
        field: String,
        /// What the field belongs to (e.g. "task").
        context: String,
    },

    /// A keyword, parameter name, or value is not in the recognized
    /// vocabulary, or a date string failed to parse.
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    /// An index token is not a valid positive integer.
    #[error("'{0}' is not a valid number")]
    InvalidIndex(String),

    /// A 1-based index points past the end of the list.
    #[error("There is no entry at position {0}")]
    OutOfRange(usize),

    /// Failed to read or write persisted state.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error (paths, settings file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskpadError {
    /// Shorthand for the empty-body failure.
    pub fn empty_body(field: &str, context: &str) -> Self {
        Self::EmptyBody {
            field: field.to_string(),
            context: context.to_string(),
        }
    }

    /// True for failures a user can fix by retyping the command, as opposed
    /// to environment problems like a missing data directory.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyBody { .. }
                | Self::UnknownInput(_)
                | Self::InvalidIndex(_)
                | Self::OutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_message() {
        let err = TaskpadError::empty_body("task number", "task");
        assert_eq!(err.to_string(), "The task number of a task cannot be empty.");
    }

    #[test]
    fn test_unknown_input_carries_token() {
        let err = TaskpadError::UnknownInput("frobnicate".to_string());
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(TaskpadError::InvalidIndex("abc".to_string()).is_user_error());
        assert!(TaskpadError::OutOfRange(7).is_user_error());
        assert!(!TaskpadError::Storage("disk full".to_string()).is_user_error());
    }
}
