//! Flat-file task store.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::NimbusError;
use crate::task::Task;

use super::codec::{decode_task, encode_task};
use super::TaskStore;

/// Stores tasks one per line in a text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. Nothing is read until [`TaskStore::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the task file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>, NimbusError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let tasks = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                decode_task(line).map_err(|reason| NimbusError::Storage { line: i + 1, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), NimbusError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&encode_task(task));
            contents.push('\n');
        }

        std::fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
