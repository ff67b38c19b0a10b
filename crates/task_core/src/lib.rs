//! Task list core: the controller that owns the collection and the pure view derived from it.

mod controller;
pub mod ids;
pub mod samples;
pub mod view;

pub use controller::TaskListController;
pub use view::{render, LatestFrame, RenderState, TaskRow, TaskSummary, ViewSurface};

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;
