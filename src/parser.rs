//! Command line parser.
//!
//! A line has the shape `keyword argument`, where the argument may carry
//! named options written as in-line tags:
//!
//! ```text
//! deadline return book /by 2024-01-01
//! event project meeting /from mon 2pm /to mon 4pm
//! ```
//!
//! The helpers here are pure string functions. Each option is located by
//! its name, so options may appear in any order and extracting one never
//! affects extracting another from the same argument.

use tracing::debug;

use crate::command::Command;
use crate::error::{ArgumentError, NimbusError};

const OPTION_MARKER: char = '/';

/// Return the command keyword of a line.
///
/// This is the text before the first space, or the whole trimmed line when
/// there is no space. Never fails; unknown keywords are rejected by [`parse`].
///
/// # Examples
///
/// ```
/// use nimbus::parser::classify;
///
/// assert_eq!(classify("todo buy milk"), "todo");
/// assert_eq!(classify("bye"), "bye");
/// ```
#[must_use]
pub fn classify(line: &str) -> &str {
    let line = line.trim();
    line.split_once(' ').map_or(line, |(keyword, _)| keyword)
}

/// Return the human-readable part of an argument, before any option.
#[must_use]
pub fn strip_to_description(argument: &str) -> &str {
    argument
        .split_once(OPTION_MARKER)
        .map_or(argument, |(description, _)| description)
        .trim()
}

/// Return everything after the keyword.
///
/// # Errors
///
/// Returns `ArgumentError::MissingArgument` if the trimmed line is a lone
/// keyword.
///
/// # Examples
///
/// ```
/// use nimbus::parser::extract_argument;
///
/// assert_eq!(extract_argument("todo buy milk").unwrap(), "buy milk");
/// assert!(extract_argument("todo").is_err());
/// ```
pub fn extract_argument(line: &str) -> Result<&str, ArgumentError> {
    line.trim()
        .split_once(' ')
        .map(|(_, argument)| argument)
        .ok_or(ArgumentError::MissingArgument)
}

/// Return the value of the `/name` option in `argument`.
///
/// The value runs from the end of the tag to the next `/`, or to the end of
/// the argument, and is trimmed.
///
/// # Errors
///
/// Returns `ArgumentError::MissingOption` if the tag does not occur.
///
/// # Examples
///
/// ```
/// use nimbus::parser::extract_option;
///
/// let argument = "meeting /from Mon /to Tue";
/// assert_eq!(extract_option(argument, "from").unwrap(), "Mon");
/// assert_eq!(extract_option(argument, "to").unwrap(), "Tue");
/// ```
pub fn extract_option<'a>(argument: &'a str, name: &str) -> Result<&'a str, ArgumentError> {
    let tag = format!("{OPTION_MARKER}{name}");
    let start = argument
        .find(&tag)
        .ok_or_else(|| ArgumentError::MissingOption(name.to_string()))?;

    let rest = &argument[start + tag.len()..];
    let value = rest
        .split_once(OPTION_MARKER)
        .map_or(rest, |(value, _)| value);
    Ok(value.trim())
}

/// Turn a raw line into a validated [`Command`].
///
/// # Errors
///
/// Returns `NimbusError::InvalidCommand` for an unknown keyword and
/// `NimbusError::InvalidArgument` when the argument does not fit the
/// command.
pub fn parse(line: &str) -> Result<Command, NimbusError> {
    let keyword = classify(line);
    debug!(keyword, "dispatching command");

    let command = match keyword {
        "list" => Command::List,
        "bye" => Command::Exit,
        "todo" => Command::todo(extract_argument(line)?)?,
        "deadline" => Command::deadline(extract_argument(line)?)?,
        "event" => Command::event(extract_argument(line)?)?,
        "mark" => Command::mark(extract_argument(line)?)?,
        "unmark" => Command::unmark(extract_argument(line)?)?,
        "remove" => Command::remove(extract_argument(line)?)?,
        "find" => Command::find(extract_argument(line)?)?,
        other => return Err(NimbusError::InvalidCommand(other.to_string())),
    };

    Ok(command)
}
