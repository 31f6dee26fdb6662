//! Pretty console rendering of task and note listings.

use colored::Colorize;

use crate::model::{Note, Priority, Task};

/// Format a numbered task listing under a title header.
#[must_use]
pub fn format_tasks_pretty(tasks: &[&Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No tasks here.");
    }

    let mut output = format!("{title} ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (position, task) in tasks.iter().enumerate() {
        let line = if task.is_done() {
            task.to_string().dimmed().to_string()
        } else {
            task.to_string()
        };
        output.push_str(&format!("{}. {line}\n", position + 1));
    }

    output
}

/// Format a numbered note listing under a title header.
#[must_use]
pub fn format_notes_pretty(notes: &[&Note], title: &str) -> String {
    if notes.is_empty() {
        return format!("{title} (0 items)\n  No notes yet.");
    }

    let mut output = format!("{title} ({} items)\n", notes.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (position, note) in notes.iter().enumerate() {
        let badge = match note.priority {
            Priority::High => format!("[{}]", note.priority).red().bold().to_string(),
            Priority::Medium => format!("[{}]", note.priority).yellow().to_string(),
            Priority::Low => format!("[{}]", note.priority).dimmed().to_string(),
        };
        output.push_str(&format!(
            "{}. {badge} {}: {}\n",
            position + 1,
            note.title.bold(),
            note.description
        ));
    }

    output
}
