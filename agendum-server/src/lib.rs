pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    message_response::MessageResponse,
    tasks::{
        create_task_request::CreateTaskRequest,
        task_created_response::TaskCreatedResponse,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        tasks::{create_task, delete_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
    workspaces::{
        create_workspace_request::CreateWorkspaceRequest,
        update_workspace_request::UpdateWorkspaceRequest,
        workspace_created_response::WorkspaceCreatedResponse,
        workspace_dto::WorkspaceDto,
        workspace_list_response::WorkspaceListResponse,
        workspaces::{create_workspace, delete_workspace, list_workspaces, update_workspace},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
