//! nimbus - a text-command task tracker
//!
//! A user types short commands such as `todo read book` or
//! `deadline return book /by friday`. Each line is parsed into a
//! [`Command`], validated, applied to the [`TaskList`] and saved.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod session;
pub mod storage;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use command::{Command, CommandOutput};
pub use error::{ArgumentError, NimbusError};
pub use session::Session;
pub use task::{Task, TaskKind, TaskList};
