use crate::Task;

#[test]
fn test_task_new() {
    let task = Task::new(
        "Write report".to_string(),
        Some("Quarterly numbers".to_string()),
        Some(vec!["work".to_string(), "urgent".to_string()]),
        Some("2026-09-01".to_string()),
    );

    assert_eq!(task.title, "Write report");
    assert_eq!(task.description.as_deref(), Some("Quarterly numbers"));
    assert_eq!(
        task.tags,
        Some(vec!["work".to_string(), "urgent".to_string()])
    );
    assert_eq!(task.date.as_deref(), Some("2026-09-01"));
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn test_task_new_minimal() {
    let task = Task::new("Buy milk".to_string(), None, None, None);

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, None);
    assert_eq!(task.tags, None);
    assert_eq!(task.date, None);
}

#[test]
fn test_task_ids_are_unique() {
    let a = Task::new("One".to_string(), None, None, None);
    let b = Task::new("Two".to_string(), None, None, None);

    assert_ne!(a.id, b.id);
}
