//! Error types for nimbus.
//!
//! Two families of errors exist. [`ArgumentError`] describes a command line
//! whose keyword was understood but whose argument was malformed. It is
//! wrapped by [`NimbusError`], which also covers unknown keywords and the
//! I/O, storage and configuration failures of the surrounding driver.

use thiserror::Error;

/// Reasons a command argument can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The keyword was given without any argument.
    #[error("this command needs an argument")]
    MissingArgument,

    /// A required `/option` tag is absent.
    #[error("missing option: /{0}")]
    MissingOption(String),

    /// The task description is empty after trimming.
    #[error("the description of a task cannot be empty")]
    EmptyDescription,

    /// The task description contains a line break or other control character.
    #[error("the description of a task cannot contain line breaks or control characters")]
    ControlCharacter,

    /// The search keyword is empty after trimming.
    #[error("the search keyword cannot be empty")]
    EmptyKeyword,

    /// The argument is not a task number.
    #[error("'{0}' is not a task number")]
    NotAnIndex(String),

    /// The task number is outside `[1, len]`.
    #[error("task {index} does not exist (the list has {len} task(s))")]
    IndexOutOfRange {
        /// The 1-based index that was requested.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },

    /// An option value could not be read as a date or time.
    #[error("cannot read '{value}' given to /{option} as a date")]
    InvalidTimestamp {
        /// The option the value belongs to.
        option: String,
        /// The raw value.
        value: String,
    },

    /// An event whose `/to` is earlier than its `/from`.
    #[error("an event cannot end before it starts")]
    EventEndsBeforeStart,
}

/// Top-level error type for nimbus.
#[derive(Debug, Error)]
pub enum NimbusError {
    /// The keyword is not a known command.
    #[error("I don't know the command '{0}'")]
    InvalidCommand(String),

    /// The keyword is known but its argument is malformed.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    /// A line of the task file could not be decoded.
    #[error("task file line {line}: {reason}")]
    Storage {
        /// 1-based line number in the task file.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Configuration could not be read, written or resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NimbusError {
    /// Whether the session can report this error and keep reading lines.
    ///
    /// Only command-level failures qualify; they are raised before any
    /// mutation of the task list.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidCommand(_) | Self::InvalidArgument(_))
    }
}
