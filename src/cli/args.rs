use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(about = "A text-command task tracker for the terminal")]
#[command(long_about = "nimbus - a text-command task tracker

Run without a subcommand to start an interactive session, then type
one command per line:

  todo read book                            Add a plain task
  deadline return book /by 2024-01-01       Add a task with a due date
  event meeting /from mon 2pm /to mon 4pm   Add a task spanning a period
  list                                      Show every task
  mark 1 | unmark 1                         Set or clear the done flag
  remove 1                                  Delete a task
  find book                                 Search descriptions
  bye                                       Save and quit

Tasks are saved after every change.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Task file to read and write
    ///
    /// Defaults to the `storage.data_file` config value, or
    /// `~/.nimbus/tasks.txt`.
    #[arg(short = 'f', long, env = "NIMBUS_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (the default unless
    /// configured otherwise), or 'json' for one JSON object per line.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file to use instead of `~/.nimbus/config.yaml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (repeat for debug output); `NIMBUS_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single command line and exit
    ///
    /// The words are joined with spaces and handled exactly as a line typed
    /// into the interactive session. The exit status is non-zero if the
    /// command is rejected.
    ///
    /// # Examples
    ///
    ///   nimbus exec todo read book
    ///   nimbus exec deadline return book /by friday
    ///   nimbus -o json exec list
    #[command(alias = "x")]
    Exec {
        /// The command line, e.g. `todo read book`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Print a shell completion script
    ///
    /// # Examples
    ///
    ///   nimbus completions bash > ~/.local/share/bash-completion/completions/nimbus
    ///   nimbus completions zsh > ~/.zfunc/_nimbus
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
