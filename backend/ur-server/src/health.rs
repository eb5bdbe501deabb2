use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - Health check with database status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state.pool).await;

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": if database_ok { "operational" } else { "unavailable" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we serve requests?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_reachable(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
    }
}

async fn database_reachable(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Database health check failed: {}", e);
            false
        }
    }
}
