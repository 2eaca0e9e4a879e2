use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component health with a live database probe
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "operational",
        Err(e) => {
            log::error!("Health check database probe failed: {}", e);
            "unavailable"
        }
    };

    let healthy = database == "operational";

    let health = json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "auth": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::error!("Readiness probe database check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
