//! Tasks and the ordered list that owns them.

mod list;
mod model;

pub use list::{Entry, TaskList};
pub use model::{Task, TaskKind};
