//! Executable commands.
//!
//! A [`Command`] is an immutable value representing one fully-parsed user
//! intent. It is executed exactly once, by value, against the list
//! collaborators, and returns the confirmation text to show the user.
//!
//! Add commands keep their raw description and validate it here, not at
//! parse time: separator presence and date validity are execute-time
//! concerns.

use chrono::NaiveDate;

use crate::error::TaskpadError;
use crate::list::{NoteList, TaskList};
use crate::model::{Note, Priority, Task, TaskType};
use crate::output::{format_notes_pretty, format_tasks_pretty};

/// Literal separator between a deadline description and its date.
const BY_SEPARATOR: &str = " /by ";
/// Literal separator between an event description and its date/time text.
const AT_SEPARATOR: &str = " /at ";

/// One fully-parsed user intent. Deliberately not `Clone`: a command is a
/// one-shot value, consumed by [`Command::execute`].
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a task; the description is still raw and unvalidated.
    Add {
        task_type: TaskType,
        raw_description: String,
    },
    /// Delete the task at a 1-based position.
    Delete { index: usize },
    /// Mark the task at a 1-based position as done.
    Done { index: usize },
    /// List all tasks.
    List,
    /// List tasks whose description contains the query.
    Find { query: String },
    /// Add a note; all fields were validated at parse time.
    NotesAdd {
        title: String,
        description: String,
        priority: Priority,
    },
    /// List all notes.
    NotesList,
    /// Delete the note at a 1-based position.
    NotesDelete { index: usize },
    /// End the session.
    Exit,
}

impl Command {
    /// True only for the exit command.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// True for commands that change list state and so require a save.
    #[must_use]
    pub const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. }
                | Self::Delete { .. }
                | Self::Done { .. }
                | Self::NotesAdd { .. }
                | Self::NotesDelete { .. }
        )
    }

    /// Execute the command against the list collaborators, consuming it.
    ///
    /// A command either fully succeeds or leaves the lists untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskpadError::EmptyBody`] when a required separator or
    /// description is absent, [`TaskpadError::UnknownInput`] when a deadline
    /// date fails to parse, and [`TaskpadError::OutOfRange`] for indices
    /// past the end of a list.
    pub fn execute(
        self,
        tasks: &mut TaskList,
        notes: &mut NoteList,
    ) -> Result<String, TaskpadError> {
        match self {
            Self::Add {
                task_type,
                raw_description,
            } => execute_add(task_type, &raw_description, tasks),
            Self::Delete { index } => tasks.remove(index),
            Self::Done { index } => tasks.mark_done(index),
            Self::List => {
                let all: Vec<&Task> = tasks.iter().collect();
                Ok(format_tasks_pretty(&all, "Your tasks"))
            }
            Self::Find { query } => {
                let matching = tasks.find(&query);
                Ok(format_tasks_pretty(&matching, "Matching tasks"))
            }
            Self::NotesAdd {
                title,
                description,
                priority,
            } => Ok(notes.create(Note::new(title, description, priority))),
            Self::NotesList => {
                let all: Vec<&Note> = notes.iter().collect();
                Ok(format_notes_pretty(&all, "Your notes"))
            }
            Self::NotesDelete { index } => notes.remove(index),
            Self::Exit => Ok("Bye. Hope to see you again soon!".to_string()),
        }
    }
}

/// Build the task an Add command describes and hand it to the list.
fn execute_add(
    task_type: TaskType,
    raw_description: &str,
    tasks: &mut TaskList,
) -> Result<String, TaskpadError> {
    let task = match task_type {
        TaskType::Todo => {
            if raw_description.is_empty() {
                return Err(TaskpadError::empty_body("description", "todo"));
            }
            Task::Todo {
                description: raw_description.to_string(),
                done: false,
            }
        }
        TaskType::Deadline => {
            let Some((description, date_text)) = raw_description.split_once(BY_SEPARATOR) else {
                return Err(TaskpadError::empty_body("deadline", "deadline"));
            };
            if description.is_empty() {
                return Err(TaskpadError::empty_body("description", "deadline"));
            }
            let date = date_text
                .parse::<NaiveDate>()
                .map_err(|_| TaskpadError::UnknownInput(date_text.to_string()))?;
            Task::Deadline {
                description: description.to_string(),
                date,
                done: false,
            }
        }
        TaskType::Event => {
            let Some((description, date_time_text)) = raw_description.split_once(AT_SEPARATOR)
            else {
                return Err(TaskpadError::empty_body("date and time", "event"));
            };
            if description.is_empty() {
                return Err(TaskpadError::empty_body("description", "event"));
            }
            // Stored verbatim, never parsed. Deadlines get real dates;
            // events keep whatever the user typed.
            Task::Event {
                description: description.to_string(),
                date_time_text: date_time_text.to_string(),
                done: false,
            }
        }
    };

    Ok(tasks.create(task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn lists() -> (TaskList, NoteList) {
        (TaskList::new(), NoteList::new())
    }

    // ===================
    // Add Execution
    // ===================

    #[test]
    fn test_execute_todo_appends_verbatim() {
        let (mut tasks, mut notes) = lists();
        let message = parse("todo read book")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert!(message.contains("read book"));
        assert_eq!(tasks.get(1).map(Task::description), Some("read book"));
    }

    #[test]
    fn test_execute_deadline_parses_date() {
        let (mut tasks, mut notes) = lists();
        parse("deadline submit /by 2024-01-01")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert_eq!(
            tasks.get(1),
            Some(&Task::Deadline {
                description: "submit".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                done: false,
            })
        );
    }

    #[test]
    fn test_execute_deadline_without_separator() {
        let (mut tasks, mut notes) = lists();
        let err = parse("deadline submit")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(
            err,
            TaskpadError::EmptyBody { ref field, ref context }
                if field == "deadline" && context == "deadline"
        ));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_execute_deadline_bad_date_carries_text() {
        let (mut tasks, mut notes) = lists();
        let err = parse("deadline submit /by notadate")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(err, TaskpadError::UnknownInput(ref text) if text == "notadate"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_execute_event_stores_text_verbatim() {
        let (mut tasks, mut notes) = lists();
        parse("event concert /at friday 8pm, maybe later")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert_eq!(
            tasks.get(1),
            Some(&Task::Event {
                description: "concert".to_string(),
                date_time_text: "friday 8pm, maybe later".to_string(),
                done: false,
            })
        );
    }

    #[test]
    fn test_execute_event_without_separator() {
        let (mut tasks, mut notes) = lists();
        let err = parse("event concert")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(
            err,
            TaskpadError::EmptyBody { ref field, .. } if field == "date and time"
        ));
    }

    #[test]
    fn test_execute_empty_todo_fails() {
        let (mut tasks, mut notes) = lists();
        let err = parse("todo")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(err, TaskpadError::EmptyBody { .. }));
    }

    #[test]
    fn test_first_separator_wins_the_split() {
        let (mut tasks, mut notes) = lists();
        parse("deadline finish the /by report /by 2024-06-30")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        // First " /by " wins the split, so the date text is everything
        // after it and fails to parse. Nothing is appended.
        assert!(tasks.is_empty());
    }

    // =========================
    // Delete / Done / Find
    // =========================

    #[test]
    fn test_execute_done_marks_task() {
        let (mut tasks, mut notes) = lists();
        parse("todo read book")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        parse("done 1").unwrap().execute(&mut tasks, &mut notes).unwrap();
        assert!(tasks.get(1).is_some_and(Task::is_done));
    }

    #[test]
    fn test_execute_delete_out_of_range() {
        let (mut tasks, mut notes) = lists();
        let err = parse("delete 5")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(err, TaskpadError::OutOfRange(5)));
    }

    #[test]
    fn test_execute_find_filters() {
        let (mut tasks, mut notes) = lists();
        for line in ["todo read book", "todo buy milk", "todo book flights"] {
            parse(line).unwrap().execute(&mut tasks, &mut notes).unwrap();
        }
        colored::control::set_override(false);
        let listing = parse("find book")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert!(listing.contains("read book"));
        assert!(listing.contains("book flights"));
        assert!(!listing.contains("buy milk"));
    }

    // =========================
    // Notes Execution
    // =========================

    #[test]
    fn test_execute_notes_add_and_delete() {
        let (mut tasks, mut notes) = lists();
        parse("notes add t/Groceries d/milk and eggs p/high")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert_eq!(notes.len(), 1);
        parse("notes delete 1")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn test_execute_notes_delete_out_of_range() {
        let (mut tasks, mut notes) = lists();
        let err = parse("notes delete 3")
            .unwrap()
            .execute(&mut tasks, &mut notes)
            .unwrap_err();
        assert!(matches!(err, TaskpadError::OutOfRange(3)));
    }

    // ===============
    // Command Shape
    // ===============

    #[test]
    fn test_is_exit_only_for_bye() {
        assert!(parse("bye").unwrap().is_exit());
        assert!(!parse("list").unwrap().is_exit());
        assert!(!parse("todo x").unwrap().is_exit());
        assert!(!parse("notes list").unwrap().is_exit());
    }

    #[test]
    fn test_mutates_flags() {
        assert!(parse("todo x").unwrap().mutates());
        assert!(parse("delete 1").unwrap().mutates());
        assert!(parse("done 1").unwrap().mutates());
        assert!(!parse("list").unwrap().mutates());
        assert!(!parse("find x").unwrap().mutates());
        assert!(!parse("bye").unwrap().mutates());
    }

    #[test]
    fn test_exit_leaves_lists_untouched() {
        let (mut tasks, mut notes) = lists();
        let message = parse("bye").unwrap().execute(&mut tasks, &mut notes).unwrap();
        assert!(message.contains("Bye"));
        assert!(tasks.is_empty());
        assert!(notes.is_empty());
    }
}
