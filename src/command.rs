//! The commands a user can issue.
//!
//! Every constructor validates its argument up front, so a [`Command`] that
//! exists is well formed. The only check left for [`Command::execute`] is
//! whether an index still falls inside the list, and that check happens
//! before anything is changed.

use serde::Serialize;
use tracing::debug;

use crate::core::{parse_timestamp, Timestamp};
use crate::error::ArgumentError;
use crate::parser::{extract_option, strip_to_description};
use crate::task::{Entry, Task, TaskList};

/// A single parsed instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every task.
    List,
    /// Append a task.
    Add(Task),
    /// Delete the task at a 1-based index.
    Remove(usize),
    /// Mark the task at a 1-based index as done.
    Mark(usize),
    /// Mark the task at a 1-based index as not done.
    Unmark(usize),
    /// Search descriptions for a keyword.
    Find(String),
    /// End the session.
    Exit,
}

/// What a command produced, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CommandOutput {
    Listed { tasks: Vec<Entry> },
    Added { entry: Entry, total: usize },
    Removed { task: Task, total: usize },
    Marked { entry: Entry },
    Unmarked { entry: Entry },
    Found { keyword: String, matches: Vec<Entry> },
    Exit,
}

impl Command {
    /// Build a todo from `read book`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyDescription` for a blank description.
    pub fn todo(argument: &str) -> Result<Self, ArgumentError> {
        Task::todo(argument).map(Self::Add)
    }

    /// Build a deadline from `return book /by sunday`.
    ///
    /// # Errors
    ///
    /// Returns an error if `/by` is missing or unreadable, or the description
    /// is blank.
    pub fn deadline(argument: &str) -> Result<Self, ArgumentError> {
        let by = timestamp_option(argument, "by")?;
        Task::deadline(strip_to_description(argument), by).map(Self::Add)
    }

    /// Build an event from `meeting /from mon 2pm /to mon 4pm`.
    ///
    /// # Errors
    ///
    /// Returns an error if `/from` or `/to` is missing or unreadable, the
    /// event ends before it starts, or the description is blank.
    pub fn event(argument: &str) -> Result<Self, ArgumentError> {
        let from = timestamp_option(argument, "from")?;
        let to = timestamp_option(argument, "to")?;
        Task::event(strip_to_description(argument), from, to).map(Self::Add)
    }

    /// # Errors
    ///
    /// Returns `ArgumentError::NotAnIndex` if the argument is not a number.
    pub fn mark(argument: &str) -> Result<Self, ArgumentError> {
        parse_index(argument).map(Self::Mark)
    }

    /// # Errors
    ///
    /// Returns `ArgumentError::NotAnIndex` if the argument is not a number.
    pub fn unmark(argument: &str) -> Result<Self, ArgumentError> {
        parse_index(argument).map(Self::Unmark)
    }

    /// # Errors
    ///
    /// Returns `ArgumentError::NotAnIndex` if the argument is not a number.
    pub fn remove(argument: &str) -> Result<Self, ArgumentError> {
        parse_index(argument).map(Self::Remove)
    }

    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyKeyword` for a blank keyword.
    pub fn find(argument: &str) -> Result<Self, ArgumentError> {
        let keyword = argument.trim();
        if keyword.is_empty() {
            return Err(ArgumentError::EmptyKeyword);
        }
        Ok(Self::Find(keyword.to_string()))
    }

    /// Whether a successful execution changes the list.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Remove(_) | Self::Mark(_) | Self::Unmark(_)
        )
    }

    /// Apply the command to `tasks`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::IndexOutOfRange` if an index does not name a
    /// task; the list is left untouched in that case.
    pub fn execute(self, tasks: &mut TaskList) -> Result<CommandOutput, ArgumentError> {
        debug!(command = ?self, len = tasks.len(), "executing");

        let output = match self {
            Self::List => CommandOutput::Listed {
                tasks: tasks.snapshot(),
            },
            Self::Add(task) => {
                let entry = Entry {
                    index: tasks.len() + 1,
                    task: task.clone(),
                };
                tasks.add(task);
                CommandOutput::Added {
                    entry,
                    total: tasks.len(),
                }
            },
            Self::Remove(index) => {
                let task = tasks.remove_at(index)?;
                CommandOutput::Removed {
                    task,
                    total: tasks.len(),
                }
            },
            Self::Mark(index) => CommandOutput::Marked {
                entry: tasks.mark_at(index)?,
            },
            Self::Unmark(index) => CommandOutput::Unmarked {
                entry: tasks.unmark_at(index)?,
            },
            Self::Find(keyword) => CommandOutput::Found {
                matches: tasks.find(&keyword),
                keyword,
            },
            Self::Exit => CommandOutput::Exit,
        };

        Ok(output)
    }
}

fn parse_index(argument: &str) -> Result<usize, ArgumentError> {
    let argument = argument.trim();
    argument
        .parse()
        .map_err(|_| ArgumentError::NotAnIndex(argument.to_string()))
}

fn timestamp_option(argument: &str, option: &str) -> Result<Timestamp, ArgumentError> {
    let value = extract_option(argument, option)?;
    parse_timestamp(value).ok_or_else(|| ArgumentError::InvalidTimestamp {
        option: option.to_string(),
        value: value.to_string(),
    })
}
