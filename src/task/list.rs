use serde::Serialize;

use crate::error::ArgumentError;

use super::Task;

/// A snapshot of a task together with its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// 1-based index the task can be addressed by.
    pub index: usize,
    /// The task as it was when the snapshot was taken.
    pub task: Task,
}

/// Ordered collection of tasks, addressed by 1-based index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a task and return its 1-based index.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::IndexOutOfRange` if `index` is outside `[1, len]`.
    pub fn remove_at(&mut self, index: usize) -> Result<Task, ArgumentError> {
        let offset = self.offset(index)?;
        Ok(self.tasks.remove(offset))
    }

    /// Mark the task at `index` as done and return a snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::IndexOutOfRange` if `index` is outside `[1, len]`.
    pub fn mark_at(&mut self, index: usize) -> Result<Entry, ArgumentError> {
        self.update(index, Task::mark)
    }

    /// Mark the task at `index` as not done and return a snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::IndexOutOfRange` if `index` is outside `[1, len]`.
    pub fn unmark_at(&mut self, index: usize) -> Result<Entry, ArgumentError> {
        self.update(index, Task::unmark)
    }

    /// Tasks whose description contains `keyword`, with their list indices.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<Entry> {
        self.entries().filter(|entry| entry.task.matches(keyword)).collect()
    }

    /// Every task, in order, with its index.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries().collect()
    }

    fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.tasks.iter().enumerate().map(|(i, task)| Entry {
            index: i + 1,
            task: task.clone(),
        })
    }

    fn update(&mut self, index: usize, apply: fn(&mut Task)) -> Result<Entry, ArgumentError> {
        let offset = self.offset(index)?;
        let task = &mut self.tasks[offset];
        apply(task);
        Ok(Entry {
            index,
            task: task.clone(),
        })
    }

    fn offset(&self, index: usize) -> Result<usize, ArgumentError> {
        let len = self.tasks.len();
        if index == 0 || index > len {
            return Err(ArgumentError::IndexOutOfRange { index, len });
        }
        Ok(index - 1)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
