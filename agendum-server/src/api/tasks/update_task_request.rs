use serde::Deserialize;

/// Body for PUT /tasks/{id}.
///
/// Partial update: only fields present in the body overwrite the stored
/// task. There is no way to clear a field back to null from here.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub date: Option<String>,
}
