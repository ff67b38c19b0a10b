//! Derived view: what the surface should display for a given collection, filter and edit target.

use std::fmt;

use shared::domain::{Task, TaskFilter, TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub status: TaskStatus,
    pub indicator: &'static str,
    pub is_editing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub todo: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                total: tasks.len(),
                ..Self::default()
            },
            |mut summary, task| {
                match task.status {
                    TaskStatus::Todo => summary.todo += 1,
                    TaskStatus::Pending => summary.pending += 1,
                    TaskStatus::Completed => summary.completed += 1,
                }
                summary
            },
        )
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.total == 1 { "" } else { "s" };
        write!(
            f,
            "{} task{plural} total • {} to-do • {} pending • {} completed",
            self.total, self.todo, self.pending, self.completed
        )
    }
}

/// Everything the surface needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub filter: TaskFilter,
    pub rows: Vec<TaskRow>,
    pub summary: TaskSummary,
    pub empty_message: Option<&'static str>,
    pub show_clear_completed: bool,
    pub editing: Option<TaskId>,
}

impl RenderState {
    pub fn summary_text(&self) -> String {
        self.summary.to_string()
    }
}

pub fn render(tasks: &[Task], filter: TaskFilter, editing: Option<&TaskId>) -> RenderState {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .filter(|task| filter.matches(task.status))
        .map(|task| TaskRow {
            id: task.id.clone(),
            text: task.text.clone(),
            status: task.status,
            indicator: task.status.indicator(),
            is_editing: editing == Some(&task.id),
        })
        .collect();
    let summary = TaskSummary::from_tasks(tasks);
    let empty_message = rows
        .is_empty()
        .then(|| empty_copy(filter, tasks.is_empty()));

    RenderState {
        filter,
        rows,
        summary,
        empty_message,
        show_clear_completed: summary.completed > 0,
        editing: editing.cloned(),
    }
}

fn empty_copy(filter: TaskFilter, collection_empty: bool) -> &'static str {
    match filter {
        TaskFilter::All => "🎯 Ready to be productive? Add your first task!",
        TaskFilter::Todo if collection_empty => "🎉 No tasks yet! Add one above.",
        TaskFilter::Todo => "✅ No to-do tasks! Great job!",
        TaskFilter::Pending => "⏳ No pending tasks.",
        TaskFilter::Completed => "📝 No completed tasks yet.",
    }
}

/// Whatever draws the list. It is told the full derived state after every operation.
pub trait ViewSurface {
    fn display(&mut self, state: RenderState);
}

/// Surface that keeps only the latest frame, for immediate-mode front ends and tests.
#[derive(Debug, Clone, Default)]
pub struct LatestFrame {
    frame: Option<RenderState>,
    renders: u64,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&RenderState> {
        self.frame.as_ref()
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl ViewSurface for LatestFrame {
    fn display(&mut self, state: RenderState) {
        self.renders += 1;
        self.frame = Some(state);
    }
}
