//! Line codec for the task file.
//!
//! ```text
//! T|0|read book
//! D|1|return book|2024-01-01
//! E|0|project meeting|2024-01-01 14:00|2024-01-01 16:00
//! ```
//!
//! The kind and done flag are read from the front and the timestamps from
//! the back, so a description may itself contain `|`.

use crate::core::Timestamp;
use crate::task::{Task, TaskKind};

const SEPARATOR: char = '|';

/// Encode a task as one line of the task file (without newline).
#[must_use]
pub fn encode_task(task: &Task) -> String {
    let done = if task.is_done() { '1' } else { '0' };
    let mut line = format!(
        "{}{SEPARATOR}{done}{SEPARATOR}{}",
        task.kind().code(),
        task.description()
    );

    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { by } => {
            line.push(SEPARATOR);
            line.push_str(&by.to_storage_string());
        },
        TaskKind::Event { from, to } => {
            line.push(SEPARATOR);
            line.push_str(&from.to_storage_string());
            line.push(SEPARATOR);
            line.push_str(&to.to_storage_string());
        },
    }

    line
}

/// Decode one line of the task file.
///
/// # Errors
///
/// Returns a description of what is wrong with the line.
pub fn decode_task(line: &str) -> Result<Task, String> {
    let mut front = line.splitn(3, SEPARATOR);
    let code = front.next().unwrap_or_default();
    let done = match front.next() {
        Some("1") => true,
        Some("0") => false,
        Some(other) => return Err(format!("done flag must be 0 or 1, found '{other}'")),
        None => return Err("missing done flag".to_string()),
    };
    let rest = front.next().ok_or("missing description")?;

    let task = match code {
        "T" => Task::todo(rest),
        "D" => {
            let (description, by) = split_last(rest)?;
            Task::deadline(description, read_timestamp(by)?)
        },
        "E" => {
            let (head, to) = split_last(rest)?;
            let (description, from) = split_last(head)?;
            Task::event(description, read_timestamp(from)?, read_timestamp(to)?)
        },
        other => return Err(format!("unknown task kind '{other}'")),
    };

    task.map(|task| task.with_done(done)).map_err(|e| e.to_string())
}

fn split_last(text: &str) -> Result<(&str, &str), String> {
    text.rsplit_once(SEPARATOR)
        .ok_or_else(|| "missing timestamp field".to_string())
}

fn read_timestamp(text: &str) -> Result<Timestamp, String> {
    Timestamp::from_storage_str(text).ok_or_else(|| format!("invalid timestamp '{text}'"))
}
