//! Command-line surface of nimbus.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};
