use shared::{
    domain::{Task, TaskFilter, TaskId, TaskStatus},
    error::TaskError,
};
use storage::SessionStore;
use tracing::{debug, info, warn};

use crate::{
    ids::next_task_id,
    samples::sample_tasks,
    view::{render, RenderState, ViewSurface},
};

/// Owns the task collection, applies user intents to it and redraws the surface after each one.
///
/// Every operation is total: unknown ids and empty input leave the collection untouched.
pub struct TaskListController<S: SessionStore, V: ViewSurface> {
    store: S,
    view: V,
    tasks: Vec<Task>,
    filter: TaskFilter,
    editing: Option<TaskId>,
}

impl<S: SessionStore, V: ViewSurface> TaskListController<S, V> {
    /// Restores the session collection, seeding the sample tasks when nothing was stored.
    pub fn new(store: S, view: V) -> Self {
        let tasks = match store.restore() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("session store restore failed, starting empty: {err:#}");
                Vec::new()
            }
        };

        let mut controller = Self {
            store,
            view,
            tasks,
            filter: TaskFilter::All,
            editing: None,
        };

        if controller.tasks.is_empty() {
            controller.tasks = sample_tasks();
            info!(tasks = controller.tasks.len(), "seeded sample tasks");
            controller.persist();
        } else {
            info!(tasks = controller.tasks.len(), "restored session tasks");
        }

        controller.refresh();
        controller
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn editing_id(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    pub fn render(&self) -> RenderState {
        render(&self.tasks, self.filter, self.editing.as_ref())
    }

    /// Prepends a new todo task. Returns its id, or `None` when the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("add ignored: empty text");
            return None;
        }

        let task = Task::new(next_task_id(), text);
        let id = task.id.clone();
        debug!(task_id = %id, "add task");
        self.tasks.insert(0, task);
        self.persist();
        self.refresh();
        Some(id)
    }

    /// Returns whether a task with `id` existed.
    pub fn set_status(&mut self, id: &TaskId, status: TaskStatus) -> bool {
        let found = match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                debug!(task_id = %id, from = %task.status, to = %status, "set status");
                task.status = status;
                true
            }
            None => {
                debug!(task_id = %id, "set status ignored: unknown id");
                false
            }
        };

        if found {
            self.persist();
        }
        self.refresh();
        found
    }

    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        let Some(target) = self.task(id).map(|task| task.status.toggled()) else {
            debug!(task_id = %id, "toggle ignored: unknown id");
            return false;
        };
        self.set_status(id, target)
    }

    /// Returns whether a task was removed.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        let removed = self.tasks.len() != before;

        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }

        if removed {
            debug!(task_id = %id, "delete task");
            self.persist();
        } else {
            debug!(task_id = %id, "delete ignored: unknown id");
        }
        self.refresh();
        removed
    }

    /// Marks `id` as the single task in edit mode. The id is not checked.
    pub fn begin_edit(&mut self, id: &TaskId) {
        debug!(task_id = %id, "begin edit");
        self.editing = Some(id.clone());
        self.refresh();
    }

    /// Saves trimmed text in place; empty text deletes the task instead.
    pub fn commit_edit(&mut self, id: &TaskId, new_text: &str) {
        let text = new_text.trim();
        if text.is_empty() {
            debug!(task_id = %id, "edit emptied text, deleting task");
            self.delete(id);
            return;
        }

        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                debug!(task_id = %id, "commit edit");
                task.text = text.to_string();
            }
            None => debug!(task_id = %id, "commit edit ignored: unknown id"),
        }
        self.editing = None;
        self.persist();
        self.refresh();
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(task_id = %id, "cancel edit");
        }
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        debug!(filter = %filter, "set filter");
        self.filter = filter;
        self.refresh();
    }

    /// Like [`Self::set_filter`] for free-form names; unknown names leave the filter as it was.
    pub fn set_filter_named(&mut self, name: &str) -> Result<(), TaskError> {
        let filter = name.parse::<TaskFilter>()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Removes every completed task and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.status != TaskStatus::Completed);
        let removed = before - self.tasks.len();

        if self
            .editing
            .as_ref()
            .is_some_and(|id| self.task(id).is_none())
        {
            self.editing = None;
        }

        debug!(removed, "clear completed");
        self.persist();
        self.refresh();
        removed
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.persist(&self.tasks) {
            warn!(tasks = self.tasks.len(), "session store persist failed: {err:#}");
        }
    }

    fn refresh(&mut self) {
        let state = self.render();
        self.view.display(state);
    }
}
