//! Configuration management for nimbus.
//!
//! This module handles loading configuration from `~/.nimbus/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StorageConfig};
