//! Controller layer: user intents and how they reach the task list controller.

pub mod events;
pub mod orchestration;
