//! Moves intents from widgets to the task list controller.
//!
//! Widgets only queue intents while a frame is being laid out; the app drains
//! the queue after layout so each intent runs to completion on the UI thread.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::TaskId;
use storage::SessionStore;
use task_core::{TaskListController, ViewSurface};

use crate::controller::events::TaskIntent;

pub const INTENT_QUEUE_CAPACITY: usize = 64;

/// Queue handle given to widgets for one frame.
pub struct IntentSink<'a> {
    tx: &'a Sender<TaskIntent>,
    status: &'a mut Option<String>,
}

impl<'a> IntentSink<'a> {
    pub fn new(tx: &'a Sender<TaskIntent>, status: &'a mut Option<String>) -> Self {
        Self { tx, status }
    }

    pub fn send(&mut self, intent: TaskIntent) {
        dispatch_intent(self.tx, intent, self.status);
    }
}

pub fn dispatch_intent(tx: &Sender<TaskIntent>, intent: TaskIntent, status: &mut Option<String>) {
    let name = intent.name();
    match tx.try_send(intent) {
        Ok(()) => tracing::debug!(intent = name, "queued ui intent"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(intent = name, "intent queue full");
            *status = Some("Too many pending actions; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(intent = name, "intent queue disconnected");
            *status = Some("Task list stopped accepting actions; restart the app".to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Added(TaskId),
    Applied,
    Ignored,
    ReloadRequested,
}

pub fn apply_intent<S: SessionStore, V: ViewSurface>(
    controller: &mut TaskListController<S, V>,
    intent: TaskIntent,
) -> IntentOutcome {
    let applied = |hit: bool| {
        if hit {
            IntentOutcome::Applied
        } else {
            IntentOutcome::Ignored
        }
    };

    match intent {
        TaskIntent::Add { text } => controller
            .add(&text)
            .map_or(IntentOutcome::Ignored, IntentOutcome::Added),
        TaskIntent::SetStatus { id, status } => applied(controller.set_status(&id, status)),
        TaskIntent::ToggleComplete { id } => applied(controller.toggle_complete(&id)),
        TaskIntent::Delete { id } => applied(controller.delete(&id)),
        TaskIntent::BeginEdit { id } => {
            controller.begin_edit(&id);
            IntentOutcome::Applied
        }
        TaskIntent::CommitEdit { id, text } => {
            controller.commit_edit(&id, &text);
            IntentOutcome::Applied
        }
        TaskIntent::CancelEdit => {
            controller.cancel_edit();
            IntentOutcome::Applied
        }
        TaskIntent::SetFilter(filter) => {
            controller.set_filter(filter);
            IntentOutcome::Applied
        }
        TaskIntent::ClearCompleted => applied(controller.clear_completed() > 0),
        TaskIntent::Reload => IntentOutcome::ReloadRequested,
    }
}
