//! Liveness, readiness, and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RootBody {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

/// Liveness probe at the root path.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "Service is running", body = RootBody))
)]
pub async fn root() -> Json<RootBody> {
    Json(RootBody {
        status: "ok",
        message: "Student registry is running",
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Service is alive", body = HealthBody))
)]
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Readiness probe. 503 while storage cannot be reached.
#[utoipa::path(
    get,
    path = "/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Storage reachable", body = ReadyBody),
        (status = 503, description = "Storage unavailable", body = ReadyBody)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.sessions.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
