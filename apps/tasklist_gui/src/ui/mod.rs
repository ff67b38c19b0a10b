//! UI layer: the eframe app shell and the task row widget.

pub mod app;
pub mod task_row;

pub use app::TaskListApp;
