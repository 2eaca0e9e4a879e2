//! Task REST API handlers
//!
//! All task endpoints sit behind the bearer-token gate. Tasks carry no
//! owner reference: any authenticated caller may list, change, or delete
//! any task.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateTaskRequest, MessageResponse,
    TaskCreatedResponse, TaskDto, TaskListResponse, UpdateTaskRequest,
};

use agendum_core::Task;
use agendum_db::TaskRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /tasks
///
/// Create a task and return its new id
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let title = req.title.ok_or_else(|| ApiError::Validation {
        message: "title is required".to_string(),
        field: Some("title".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let task = Task::new(title, req.description, req.tags, req.date);

    let repo = TaskRepository::new(state.pool.clone());
    repo.create(&task).await?;

    log::debug!("User {} created task {}", user_id, task.id);

    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            task_id: task.id.to_string(),
        }),
    ))
}

/// GET /tasks
///
/// List all tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<TaskListResponse>> {
    let repo = TaskRepository::new(state.pool.clone());
    let tasks = repo.find_all().await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// PUT /tasks/{id}
///
/// Partial update: only fields present in the body overwrite stored values.
/// An update that changes nothing reports NotFound, exactly like a missing
/// id; callers cannot tell the two apart.
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut merged = existing.clone();
    if let Some(title) = req.title {
        merged.title = title;
    }
    if let Some(description) = req.description {
        merged.description = Some(description);
    }
    if let Some(tags) = req.tags {
        merged.tags = Some(tags);
    }
    if let Some(date) = req.date {
        merged.date = Some(date);
    }

    if merged == existing {
        return Err(ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    merged.updated_at = Utc::now();

    let rows = repo.update(&merged).await?;
    if rows == 0 {
        // Row disappeared between the load above and this write
        return Err(ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::debug!("User {} updated task {}", user_id, task_id);

    Ok(Json(MessageResponse::new("Task updated")))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let repo = TaskRepository::new(state.pool.clone());
    let rows = repo.delete(task_id).await?;
    if rows == 0 {
        return Err(ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::debug!("User {} deleted task {}", user_id, task_id);

    Ok(Json(MessageResponse::new("Task deleted")))
}
