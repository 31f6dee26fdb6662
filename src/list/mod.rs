//! The mutable list collaborators commands act on.

pub mod notes;
pub mod tasks;

pub use notes::NoteList;
pub use tasks::TaskList;
