use todobar_core::{Task, TaskId};
use uuid::Uuid;

fn fixed_id() -> TaskId {
    Uuid::parse_str("6f2e9f04-58cb-4f46-9a5e-0f6b4d6ad001").unwrap()
}

fn fixed_task() -> Task {
    Task {
        id: fixed_id(),
        title: "Buy oat milk".to_string(),
        is_completed: false,
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn new_task_defaults_to_incomplete() {
    let task = Task::new("Buy oat milk");
    assert!(!task.is_completed);
    assert_eq!(task.title, "Buy oat milk");
    assert!(task.created_at > 0);
}

#[test]
fn new_tasks_receive_distinct_ids() {
    let first = Task::new("same title");
    let second = Task::new("same title");
    assert_ne!(first.id, second.id);
}

#[test]
fn constructor_stores_title_verbatim() {
    let task = Task::new("  padded title  ");
    assert_eq!(task.title, "  padded title  ");
}

#[test]
fn toggle_flips_only_the_completion_flag() {
    let mut task = fixed_task();

    task.toggle();
    assert!(task.is_completed);

    task.toggle();
    assert!(!task.is_completed);
    assert_eq!(task.id, fixed_id());
    assert_eq!(task.title, "Buy oat milk");
    assert_eq!(task.created_at, 1_700_000_000_000);
}

#[test]
fn task_serializes_with_stable_wire_fields() {
    let source = fixed_task();
    let json = serde_json::to_value(&source).unwrap();
    assert_eq!(json["id"], "6f2e9f04-58cb-4f46-9a5e-0f6b4d6ad001");
    assert_eq!(json["title"], "Buy oat milk");
    assert_eq!(json["is_completed"], false);
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, source);
}
