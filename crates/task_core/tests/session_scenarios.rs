use shared::domain::{TaskFilter, TaskId, TaskStatus};
use storage::{MemorySessionStore, SessionStore};
use task_core::{LatestFrame, TaskListController};

fn emptied_controller(store: MemorySessionStore) -> TaskListController<MemorySessionStore, LatestFrame> {
    let mut controller = TaskListController::new(store, LatestFrame::new());
    for id in ["sample1", "sample2", "sample3", "sample4"] {
        assert!(controller.delete(&TaskId::from(id)));
    }
    assert!(controller.tasks().is_empty());
    controller
}

#[test]
fn add_two_complete_one_and_filter() {
    let mut controller = emptied_controller(MemorySessionStore::new());

    let milk = controller.add("Buy milk").expect("milk");
    controller.add("Call mom").expect("mom");

    let texts: Vec<&str> = controller.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Call mom", "Buy milk"]);

    controller.set_status(&milk, TaskStatus::Completed);
    controller.set_filter(TaskFilter::Completed);

    let frame = controller.view().frame().expect("rendered");
    let shown: Vec<&str> = frame.rows.iter().map(|row| row.text.as_str()).collect();
    assert_eq!(shown, ["Buy milk"]);
    assert_eq!(
        frame.summary_text(),
        "2 tasks total • 1 to-do • 0 pending • 1 completed"
    );
    assert!(frame.show_clear_completed);
    assert_eq!(frame.empty_message, None);
}

#[test]
fn fresh_session_shows_four_samples() {
    let controller = TaskListController::new(MemorySessionStore::new(), LatestFrame::new());

    let frame = controller.view().frame().expect("rendered");
    let rows: Vec<(&str, &str, TaskStatus)> = frame
        .rows
        .iter()
        .map(|row| (row.id.as_str(), row.text.as_str(), row.status))
        .collect();
    assert_eq!(
        rows,
        [
            ("sample1", "👋 Welcome to your Todo List!", TaskStatus::Todo),
            (
                "sample2",
                "📝 Click the status icon to toggle between states",
                TaskStatus::Todo
            ),
            ("sample3", "⏳ This task is in pending status", TaskStatus::Pending),
            ("sample4", "✅ This task has been completed", TaskStatus::Completed),
        ]
    );
    assert_eq!(
        frame.summary_text(),
        "4 tasks total • 2 to-do • 1 pending • 1 completed"
    );
}

#[test]
fn rebuilt_controller_restores_what_the_session_saved() {
    let store = MemorySessionStore::new();
    let mut first = emptied_controller(store.clone());
    first.add("survives reload").expect("added");
    drop(first);

    let second = TaskListController::new(store.clone(), LatestFrame::new());
    let texts: Vec<&str> = second.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["survives reload"]);
    assert_eq!(store.restore().expect("restore").len(), 1);
}

#[test]
fn emptied_list_shows_filter_specific_empty_state() {
    let mut controller = emptied_controller(MemorySessionStore::new());

    let frame = controller.view().frame().expect("rendered");
    assert_eq!(
        frame.empty_message,
        Some("🎯 Ready to be productive? Add your first task!")
    );
    assert!(!frame.show_clear_completed);

    controller.set_filter(TaskFilter::Todo);
    let frame = controller.view().frame().expect("rendered");
    assert_eq!(frame.empty_message, Some("🎉 No tasks yet! Add one above."));
}
