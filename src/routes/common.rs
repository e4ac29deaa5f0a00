//! Common routes: root liveness, health, readiness, version, OpenAPI document.

use crate::doc::ApiDoc;
use crate::handlers::health::{health, ready, root, version};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
