use serde::Deserialize;

/// Body for POST /tasks.
///
/// `title` is required but kept `Option` so the handler can answer a
/// missing title with a VALIDATION_ERROR naming the field.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required)
    #[serde(default)]
    pub title: Option<String>,

    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Optional date, stored verbatim (no format is enforced)
    #[serde(default)]
    pub date: Option<String>,
}
