//! Domain types shared by the task list core, its session store and the desktop view.

pub mod domain;
pub mod error;

pub use domain::{Task, TaskFilter, TaskId, TaskStatus};
pub use error::TaskError;
