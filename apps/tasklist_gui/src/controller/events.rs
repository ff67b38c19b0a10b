//! User intents emitted by the view surface.

use shared::domain::{TaskFilter, TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    Add { text: String },
    SetStatus { id: TaskId, status: TaskStatus },
    ToggleComplete { id: TaskId },
    Delete { id: TaskId },
    BeginEdit { id: TaskId },
    CommitEdit { id: TaskId, text: String },
    CancelEdit,
    SetFilter(TaskFilter),
    ClearCompleted,
    /// Rebuild the controller from the session store, as a page reload would.
    Reload,
}

impl TaskIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::SetStatus { .. } => "set_status",
            Self::ToggleComplete { .. } => "toggle_complete",
            Self::Delete { .. } => "delete",
            Self::BeginEdit { .. } => "begin_edit",
            Self::CommitEdit { .. } => "commit_edit",
            Self::CancelEdit => "cancel_edit",
            Self::SetFilter(_) => "set_filter",
            Self::ClearCompleted => "clear_completed",
            Self::Reload => "reload",
        }
    }
}
