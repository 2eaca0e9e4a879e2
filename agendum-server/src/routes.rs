use crate::health;
use crate::{
    AppState, create_task, create_workspace, delete_task, delete_workspace, list_tasks,
    list_workspaces, login, logout, register, update_task, update_workspace,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Account and session endpoints
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        // Task endpoints
        .route("/tasks", post(create_task).get(list_tasks))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        // Workspace endpoints
        .route("/workspaces", post(create_workspace).get(list_workspaces))
        .route(
            "/workspaces/{id}",
            put(update_workspace).delete(delete_workspace),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
