use crate::WorkspaceDto;
use serde::Serialize;

/// List of workspaces response
#[derive(Debug, Serialize)]
pub struct WorkspaceListResponse {
    pub workspaces: Vec<WorkspaceDto>,
}
