//! Student handlers: list, read, create, delete.

use crate::error::AppError;
use crate::extractors::{DbSession, StudentId, StudentPayload};
use crate::response::{created, ok};
use crate::schema::{StudentCreate, StudentResponse};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// List every student, ordered by id.
#[utoipa::path(
    get,
    path = "/students",
    tags = ["students"],
    responses(
        (status = 200, description = "All students", body = [StudentResponse]),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn list(DbSession(mut session): DbSession) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::list(session.as_mut()).await?;
    Ok(ok(students))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/students/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = StudentResponse),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Id is not an integer")
    )
)]
pub async fn read(
    StudentId(id): StudentId,
    DbSession(mut session): DbSession,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::get(session.as_mut(), id).await?;
    Ok(ok(student))
}

/// Register a student. The body is validated before a session is acquired.
#[utoipa::path(
    post,
    path = "/students",
    tags = ["students"],
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Body failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    StudentPayload(new): StudentPayload,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.sessions.acquire().await?;
    let student = StudentService::create(session.as_mut(), new).await?;
    Ok(created(student))
}

/// Remove a student.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tags = ["students"],
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Id is not an integer")
    )
)]
pub async fn delete(
    StudentId(id): StudentId,
    DbSession(mut session): DbSession,
) -> Result<StatusCode, AppError> {
    StudentService::delete(session.as_mut(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
