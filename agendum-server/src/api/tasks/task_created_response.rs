use serde::Serialize;

/// Response for a successful task creation
#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    /// Canonical string form of the new task's UUID
    pub task_id: String,
}
