use std::fmt;

use serde::Serialize;

use crate::core::Timestamp;
use crate::error::ArgumentError;

/// The kind of a task and the fields that come with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TaskKind {
    /// A plain task.
    Todo,
    /// A task that must be done by a point in time.
    Deadline {
        /// When the task is due.
        by: Timestamp,
    },
    /// A task spanning a period of time.
    Event {
        /// When the event starts.
        from: Timestamp,
        /// When the event ends.
        to: Timestamp,
    },
}

impl TaskKind {
    /// Single-letter code used in the task file and the `[T]` badge.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    description: String,
    done: bool,
    #[serde(flatten)]
    kind: TaskKind,
}

impl Task {
    /// Create an unfinished task.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyDescription` if the description is blank,
    /// or `ArgumentError::ControlCharacter` if it contains a line break or
    /// other control character.
    pub fn new(description: &str, kind: TaskKind) -> Result<Self, ArgumentError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ArgumentError::EmptyDescription);
        }
        if description.chars().any(char::is_control) {
            return Err(ArgumentError::ControlCharacter);
        }

        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    /// Create a plain todo.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyDescription` if the description is blank.
    pub fn todo(description: &str) -> Result<Self, ArgumentError> {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a deadline.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyDescription` if the description is blank.
    pub fn deadline(description: &str, by: Timestamp) -> Result<Self, ArgumentError> {
        Self::new(description, TaskKind::Deadline { by })
    }

    /// Create an event.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EventEndsBeforeStart` if `to` precedes `from`,
    /// or `ArgumentError::EmptyDescription` if the description is blank.
    pub fn event(description: &str, from: Timestamp, to: Timestamp) -> Result<Self, ArgumentError> {
        if to < from {
            return Err(ArgumentError::EventEndsBeforeStart);
        }
        Self::new(description, TaskKind::Event { from, to })
    }

    /// Builder-style completion flag, used when restoring saved tasks.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Case-sensitive substring match on the description.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        self.description.contains(keyword)
    }

    /// `X` when done, a space otherwise.
    #[must_use]
    pub const fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.code(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {by})"),
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}
