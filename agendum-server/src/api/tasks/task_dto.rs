use agendum_core::Task;

use serde::Serialize;

/// Task DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title,
            description: t.description,
            tags: t.tags,
            date: t.date,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
