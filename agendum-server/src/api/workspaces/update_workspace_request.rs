use serde::Deserialize;

/// Body for PUT /workspaces/{id}
#[derive(Debug, Deserialize)]
pub struct UpdateWorkspaceRequest {
    #[serde(default)]
    pub name: Option<String>,
}
