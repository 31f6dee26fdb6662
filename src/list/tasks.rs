//! The task list: creation, 1-based access, completion, and search.

use serde::{Deserialize, Serialize};

use crate::error::TaskpadError;
use crate::model::Task;

/// The mutable collection of tasks. All user-facing positions are 1-based.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Get a task by 1-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Append a task and return the confirmation shown to the user.
    pub fn create(&mut self, task: Task) -> String {
        let rendered = task.to_string();
        self.tasks.push(task);
        format!(
            "Got it. I've added this task:\n  {rendered}\n{}",
            self.count_line()
        )
    }

    /// Remove the task at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskpadError::OutOfRange`] when the position does not
    /// refer to a task.
    pub fn remove(&mut self, index: usize) -> Result<String, TaskpadError> {
        let at = self.resolve(index)?;
        let removed = self.tasks.remove(at);
        Ok(format!(
            "Noted. I've removed this task:\n  {removed}\n{}",
            self.count_line()
        ))
    }

    /// Mark the task at a 1-based position as done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskpadError::OutOfRange`] when the position does not
    /// refer to a task.
    pub fn mark_done(&mut self, index: usize) -> Result<String, TaskpadError> {
        let at = self.resolve(index)?;
        let task = &mut self.tasks[at];
        task.mark_done();
        Ok(format!("Nice! I've marked this task as done:\n  {task}"))
    }

    /// All tasks whose description contains the query, case-insensitively,
    /// in insertion order. An empty query matches every task.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<&Task> {
        let needle = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    fn resolve(&self, index: usize) -> Result<usize, TaskpadError> {
        index
            .checked_sub(1)
            .filter(|&i| i < self.tasks.len())
            .ok_or(TaskpadError::OutOfRange(index))
    }

    fn count_line(&self) -> String {
        let noun = if self.tasks.len() == 1 { "task" } else { "tasks" };
        format!("Now you have {} {noun} in the list.", self.tasks.len())
    }
}
