//! Console output formatting.

pub mod pretty;

pub use pretty::{format_notes_pretty, format_tasks_pretty};
