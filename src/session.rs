//! The per-line run loop.
//!
//! A [`Session`] owns the task list for the whole run. Each line is parsed,
//! executed and, when it changed the list, saved before the next line is
//! read. Rejected lines are reported and skipped; they never touch the list.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::command::CommandOutput;
use crate::error::NimbusError;
use crate::output::Renderer;
use crate::parser;
use crate::storage::TaskStore;
use crate::task::TaskList;

/// What the driver should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing to report (blank line).
    Idle,
    /// Show the output and read the next line.
    Continue(CommandOutput),
    /// Show the output and stop.
    Exit(CommandOutput),
}

/// An interactive or one-shot run over a single task list.
pub struct Session<S: TaskStore> {
    tasks: TaskList,
    store: S,
    renderer: Renderer,
}

impl<S: TaskStore> Session<S> {
    /// Load the saved tasks and start a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: S, renderer: Renderer) -> Result<Self, NimbusError> {
        let tasks = TaskList::from(store.load()?);
        info!(count = tasks.len(), "session opened");
        Ok(Self {
            tasks,
            store,
            renderer,
        })
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Handle one raw line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommand` or `InvalidArgument` for a rejected line (the
    /// list is unchanged), or a storage error if saving the changed list
    /// failed (the change is kept in memory).
    pub fn handle_line(&mut self, line: &str) -> Result<Step, NimbusError> {
        if line.trim().is_empty() {
            return Ok(Step::Idle);
        }

        let command = parser::parse(line)?;
        let mutating = command.is_mutating();
        let output = command.execute(&mut self.tasks)?;

        if mutating {
            self.store.save(self.tasks.as_slice())?;
            info!(count = self.tasks.len(), "saved task list");
        }

        Ok(match output {
            CommandOutput::Exit => Step::Exit(output),
            other => Step::Continue(other),
        })
    }

    /// Read lines from `input` until `bye` or end of input, writing every
    /// result to `out`.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a line is
    /// reported like any other unknown command.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), NimbusError> {
        writeln!(out, "{}", self.renderer.greeting())?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            match self.handle_line(line) {
                Ok(Step::Idle) => {},
                Ok(Step::Continue(output)) => {
                    writeln!(out, "{}", self.renderer.render(&output)?)?;
                },
                Ok(Step::Exit(output)) => {
                    writeln!(out, "{}", self.renderer.render(&output)?)?;
                    info!("session closed by user");
                    return Ok(());
                },
                Err(e) => {
                    warn!(error = %e, line = %line, "command failed");
                    writeln!(out, "{}", self.renderer.render_error(&e))?;
                },
            }
            out.flush()?;
        }

        writeln!(out, "{}", self.renderer.farewell())?;
        info!("session closed at end of input");
        Ok(())
    }
}
