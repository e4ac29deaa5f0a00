//! Router assembly: student and common routes behind CORS, body limit, and tracing layers.

mod common;
mod students;

pub use common::common_routes;
pub use students::student_routes;

use crate::settings::Settings;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full application router.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&settings.cors_allow_origins))
                .map_response(IntoResponse::into_response)
                .layer(RequestBodyLimitLayer::new(settings.body_limit)),
        )
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods(Any)
        .allow_headers(Any)
}
