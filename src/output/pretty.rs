use colored::Colorize;

use crate::command::CommandOutput;
use crate::error::NimbusError;
use crate::task::{Entry, Task, TaskKind};

/// Format a task as a coloured one-liner.
pub fn format_task_pretty(task: &Task) -> String {
    let badge = match task.kind() {
        TaskKind::Todo => "[T]".cyan(),
        TaskKind::Deadline { .. } => "[D]".yellow(),
        TaskKind::Event { .. } => "[E]".magenta(),
    };
    let status = if task.is_done() {
        "[X]".green()
    } else {
        "[ ]".white()
    };
    let description = if task.is_done() {
        task.description().dimmed().to_string()
    } else {
        task.description().bold().to_string()
    };

    let mut line = format!("{badge}{status} {description}");
    match task.kind() {
        TaskKind::Todo => {},
        TaskKind::Deadline { by } => {
            line.push_str(&format!(" {}", format!("(by: {by})").yellow()));
        },
        TaskKind::Event { from, to } => {
            line.push_str(&format!(" {}", format!("(from: {from} to: {to})").magenta()));
        },
    }
    line
}

fn format_entries(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}. {}", entry.index, format_task_pretty(&entry.task)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count(total: usize) -> String {
    if total == 1 {
        "1 task".to_string()
    } else {
        format!("{total} tasks")
    }
}

/// Format the result of a command for a person to read.
pub fn format_output_pretty(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Listed { tasks } if tasks.is_empty() => {
            "Your list is empty.".dimmed().to_string()
        },
        CommandOutput::Listed { tasks } => {
            format!("Here are the tasks in your list:\n{}", format_entries(tasks))
        },
        CommandOutput::Added { entry, total } => format!(
            "Got it. I've added this task:\n  {}\nNow you have {} in the list.",
            format_task_pretty(&entry.task),
            count(*total)
        ),
        CommandOutput::Removed { task, total } => format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} in the list.",
            format_task_pretty(task),
            count(*total)
        ),
        CommandOutput::Marked { entry } => format!(
            "Nice! I've marked this task as done:\n  {}",
            format_task_pretty(&entry.task)
        ),
        CommandOutput::Unmarked { entry } => format!(
            "OK, I've marked this task as not done yet:\n  {}",
            format_task_pretty(&entry.task)
        ),
        CommandOutput::Found { keyword, matches } if matches.is_empty() => {
            format!("No tasks match '{keyword}'.").dimmed().to_string()
        },
        CommandOutput::Found { matches, .. } => format!(
            "Here are the matching tasks in your list:\n{}",
            format_entries(matches)
        ),
        CommandOutput::Exit => farewell_pretty(),
    }
}

/// Format an error for a person to read.
pub fn format_error_pretty(error: &NimbusError) -> String {
    format!("{} {error}", "Oops!".red().bold())
}

pub fn greeting_pretty() -> String {
    format!(
        "Hello! I'm {}.\nWhat can I do for you?",
        "Nimbus".cyan().bold()
    )
}

pub fn farewell_pretty() -> String {
    "Bye. Hope to see you again soon!".to_string()
}
