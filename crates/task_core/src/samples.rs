use shared::domain::{Task, TaskId, TaskStatus};

const SAMPLES: [(&str, &str, TaskStatus); 4] = [
    ("sample1", "👋 Welcome to your Todo List!", TaskStatus::Todo),
    (
        "sample2",
        "📝 Click the status icon to toggle between states",
        TaskStatus::Todo,
    ),
    ("sample3", "⏳ This task is in pending status", TaskStatus::Pending),
    ("sample4", "✅ This task has been completed", TaskStatus::Completed),
];

/// Illustrative tasks seeded into a session that starts with nothing stored.
pub fn sample_tasks() -> Vec<Task> {
    SAMPLES
        .iter()
        .map(|(id, text, status)| Task::new(TaskId::from(*id), *text).with_status(*status))
        .collect()
}
