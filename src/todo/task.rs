//! Task data and the ordered task store.
//!
//! Tasks have no stable id: a task is identified by its position in the
//! store. Positions hold between consecutive operations, but any insert or
//! removal before a position shifts the tasks after it.

use super::error::{StateViolation, TodoError, TodoResult};
use crate::constants::{HELP_TASKS, MAX_TITLE_LENGTH};
use serde::{Deserialize, Serialize};

/// A titled, completable work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Ordered collection of tasks. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    max_title_length: usize,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TaskStore {
    /// Create a store with the default title limit.
    ///
    /// Initial titles longer than the limit are cut down so the store never
    /// holds an over-long title.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_max_title_length(tasks, MAX_TITLE_LENGTH)
    }

    pub fn with_max_title_length(tasks: Vec<Task>, max_title_length: usize) -> Self {
        let tasks = tasks
            .into_iter()
            .map(|mut task| {
                task.title = truncate_chars(&task.title, max_title_length);
                task
            })
            .collect();

        Self { tasks, max_title_length }
    }

    /// Append the built-in tutorial tasks
    pub fn seed_help(&mut self) {
        for message in HELP_TASKS {
            self.tasks.push(Task::new(truncate_chars(message, self.max_title_length)));
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn max_title_length(&self) -> usize {
        self.max_title_length
    }

    /// Append a new, uncompleted task and return its index
    pub fn add(&mut self, title: &str) -> TodoResult<usize> {
        self.check_title(title)?;
        self.tasks.push(Task::new(title));
        Ok(self.tasks.len() - 1)
    }

    /// Remove the task at `index`, shifting later tasks down by one
    pub fn remove(&mut self, index: usize) -> TodoResult<Task> {
        if self.tasks.is_empty() {
            return Err(TodoError::InvalidState(StateViolation::ListEmpty));
        }
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Flip the completion flag and return the new value
    pub fn toggle_complete(&mut self, index: usize) -> TodoResult<bool> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn update_title(&mut self, index: usize, title: &str) -> TodoResult<()> {
        self.check_index(index)?;
        self.check_title(title)?;
        self.tasks[index].title = title.to_string();
        Ok(())
    }

    /// Swap in a whole new sequence, e.g. when the host reloads the list
    pub fn replace(&mut self, tasks: Vec<Task>) {
        *self = Self::with_max_title_length(tasks, self.max_title_length);
    }

    fn check_index(&self, index: usize) -> TodoResult<()> {
        if index >= self.tasks.len() {
            return Err(TodoError::InvalidIndex {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn check_title(&self, title: &str) -> TodoResult<()> {
        if title.is_empty() {
            return Err(TodoError::EmptyInput);
        }
        let len = title.chars().count();
        if len > self.max_title_length {
            return Err(TodoError::LengthExceeded {
                len,
                max: self.max_title_length,
            });
        }
        Ok(())
    }
}

/// Cut `text` down to at most `max` characters, respecting char boundaries
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
