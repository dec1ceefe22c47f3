//! Liveness, readiness, and store-reachability endpoints
//!
//! `/health` and `/` never touch the store, so orchestration can tell
//! "process up" apart from "store reachable" (`/db-check`).

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::http::server::AppState;

/// GET /health
async fn health() -> &'static str {
    "OK"
}

/// GET /
async fn root() -> &'static str {
    "Customer service running"
}

/// GET /db-check
async fn db_check(State(state): State<AppState>) -> (StatusCode, String) {
    match state.store().server_time().await {
        Ok(now) => (
            StatusCode::OK,
            format!("DB connected. Server time now: {}", now.to_rfc3339()),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "db check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("DB connection failed: {}", e.message()),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/db-check", get(db_check))
}
