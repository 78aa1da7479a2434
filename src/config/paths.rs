//! Path resolution for nimbus configuration and data files.
//!
//! All nimbus data is stored in `~/.nimbus/`:
//! - `config.yaml` - Configuration file
//! - `tasks.txt` - The task list

use std::path::PathBuf;

use crate::error::NimbusError;

/// Paths to nimbus configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.nimbus/config.yaml`
    pub config_file: PathBuf,
    /// Task file: `~/.nimbus/tasks.txt`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NimbusError> {
        let home = std::env::var("HOME")
            .map_err(|_| NimbusError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".nimbus")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("tasks.txt"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".nimbus"))
        })
    }
}
