#![allow(dead_code)]

use agendum_core::{Task, User, Workspace};

/// Creates a test User with a bcrypt-shaped (but inert) hash
pub fn create_test_user(email: &str) -> User {
    User::new(
        email.to_string(),
        "$2b$04$R4vY5Fb8eWbCqSxpIXbMYuAV1nOGWQvBpsPX7VKxuuMplPDaGvCO".to_string(),
        Some("Test User".to_string()),
    )
}

/// Creates a test Task with every optional field populated
pub fn create_test_task() -> Task {
    Task::new(
        "Test Task".to_string(),
        Some("Test task description".to_string()),
        Some(vec!["alpha".to_string(), "beta".to_string()]),
        Some("2026-09-01".to_string()),
    )
}

/// Creates a test Task with only the required field
pub fn create_minimal_task(title: &str) -> Task {
    Task::new(title.to_string(), None, None, None)
}

/// Creates a test Workspace
pub fn create_test_workspace(name: &str) -> Workspace {
    Workspace::new(name.to_string())
}
