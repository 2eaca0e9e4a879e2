use serde::Serialize;

/// Response for a successful workspace creation
#[derive(Debug, Serialize)]
pub struct WorkspaceCreatedResponse {
    /// Canonical string form of the new workspace's UUID
    pub workspace_id: String,
}
