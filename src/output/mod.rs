//! Output formatting for nimbus.
//!
//! Command results and errors are turned into text here; nothing else in the
//! crate decides what a user sees.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::command::CommandOutput;
use crate::error::NimbusError;

pub use json::*;
pub use pretty::*;

/// Renders command results in the chosen output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the result of a command.
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::Json` if JSON serialization fails.
    pub fn render(&self, output: &CommandOutput) -> Result<String, NimbusError> {
        match self.format {
            OutputFormat::Pretty => Ok(format_output_pretty(output)),
            OutputFormat::Json => format_output_json(output),
        }
    }

    /// Render an error.
    #[must_use]
    pub fn render_error(&self, error: &NimbusError) -> String {
        match self.format {
            OutputFormat::Pretty => format_error_pretty(error),
            OutputFormat::Json => format_error_json(error),
        }
    }

    /// The message shown when an interactive session starts.
    #[must_use]
    pub fn greeting(&self) -> String {
        match self.format {
            OutputFormat::Pretty => greeting_pretty(),
            OutputFormat::Json => format_notice_json("ready"),
        }
    }

    /// The message shown when input ends without `bye`.
    #[must_use]
    pub fn farewell(&self) -> String {
        match self.format {
            OutputFormat::Pretty => farewell_pretty(),
            OutputFormat::Json => format_notice_json("bye"),
        }
    }
}
