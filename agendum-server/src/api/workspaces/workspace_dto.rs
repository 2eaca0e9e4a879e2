use agendum_core::Workspace;

use serde::Serialize;

/// Workspace DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct WorkspaceDto {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Workspace> for WorkspaceDto {
    fn from(w: Workspace) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name,
            created_at: w.created_at.timestamp(),
            updated_at: w.updated_at.timestamp(),
        }
    }
}
