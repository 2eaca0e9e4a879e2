//! Workspace REST API handlers
//!
//! Mirrors the task endpoints: bearer-gated, no ownership, same partial
//! update and NotFound rules.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateWorkspaceRequest, MessageResponse,
    UpdateWorkspaceRequest, WorkspaceCreatedResponse, WorkspaceDto, WorkspaceListResponse,
};

use agendum_core::Workspace;
use agendum_db::WorkspaceRepository;

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

/// POST /workspaces
///
/// Create a workspace and return its new id
pub async fn create_workspace(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<CreateWorkspaceRequest>,
) -> ApiResult<(StatusCode, Json<WorkspaceCreatedResponse>)> {
    let name = req.name.ok_or_else(|| ApiError::Validation {
        message: "name is required".to_string(),
        field: Some("name".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let workspace = Workspace::new(name);

    let repo = WorkspaceRepository::new(state.pool.clone());
    repo.create(&workspace).await?;

    log::debug!("User {} created workspace {}", user_id, workspace.id);

    Ok((
        StatusCode::CREATED,
        Json(WorkspaceCreatedResponse {
            workspace_id: workspace.id.to_string(),
        }),
    ))
}

/// GET /workspaces
///
/// List all workspaces
pub async fn list_workspaces(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<WorkspaceListResponse>> {
    let repo = WorkspaceRepository::new(state.pool.clone());
    let workspaces = repo.find_all().await?;

    Ok(Json(WorkspaceListResponse {
        workspaces: workspaces.into_iter().map(WorkspaceDto::from).collect(),
    }))
}

/// PUT /workspaces/{id}
///
/// Partial update with the same no-op rule as tasks: a merge that changes
/// nothing reports NotFound.
pub async fn update_workspace(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateWorkspaceRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let workspace_id = Uuid::parse_str(&id)?;

    let repo = WorkspaceRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(workspace_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Workspace {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut merged = existing.clone();
    if let Some(name) = req.name {
        merged.name = name;
    }

    if merged == existing {
        return Err(ApiError::NotFound {
            message: format!("Workspace {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    merged.updated_at = Utc::now();

    let rows = repo.update(&merged).await?;
    if rows == 0 {
        // Row disappeared between the load above and this write
        return Err(ApiError::NotFound {
            message: format!("Workspace {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::debug!("User {} updated workspace {}", user_id, workspace_id);

    Ok(Json(MessageResponse::new("Workspace updated")))
}

/// DELETE /workspaces/{id}
pub async fn delete_workspace(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let workspace_id = Uuid::parse_str(&id)?;

    let repo = WorkspaceRepository::new(state.pool.clone());
    let rows = repo.delete(workspace_id).await?;
    if rows == 0 {
        return Err(ApiError::NotFound {
            message: format!("Workspace {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::debug!("User {} deleted workspace {}", user_id, workspace_id);

    Ok(Json(MessageResponse::new("Workspace deleted")))
}
