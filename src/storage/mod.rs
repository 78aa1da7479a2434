//! Storage layer for nimbus.
//!
//! Tasks are kept in a plain text file, one task per line, in the format
//! described in [`codec`]. The session talks to storage only through the
//! [`TaskStore`] trait.

pub mod codec;
mod file;

pub use codec::{decode_task, encode_task};
pub use file::FileStore;

use crate::error::NimbusError;
use crate::task::Task;

/// Persistence for the task list.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Read every saved task, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or decoded.
    fn load(&self) -> Result<Vec<Task>, NimbusError>;

    /// Replace the saved tasks with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<(), NimbusError>;
}
