use serde::Deserialize;

/// Body for POST /workspaces
#[derive(Debug, Deserialize)]
pub struct CreateWorkspaceRequest {
    /// Workspace name (required)
    #[serde(default)]
    pub name: Option<String>,
}
