//! Command implementations for the non-interactive subcommands.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::NimbusError;
use crate::session::{Session, Step};
use crate::storage::TaskStore;

/// Run a single command line against the stored list.
///
/// # Errors
///
/// Returns an error if the line is rejected, the list cannot be saved, or
/// the output cannot be rendered.
pub fn exec<S: TaskStore>(session: &mut Session<S>, words: &[String]) -> Result<String, NimbusError> {
    let line = words.join(" ");
    match session.handle_line(&line)? {
        Step::Idle => Ok(String::new()),
        Step::Continue(output) | Step::Exit(output) => session.renderer().render(&output),
    }
}

/// Generate a completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, NimbusError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "nimbus", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| NimbusError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
