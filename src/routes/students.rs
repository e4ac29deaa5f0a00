//! Student routes. Both `/students` and `/students/` are served.

use crate::handlers::students::{create, delete, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create))
        .route("/students/", get(list).post(create))
        .route("/students/:id", get(read).delete(delete))
        .with_state(state)
}
