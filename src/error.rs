//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("unknown storage backend '{0}' (expected 'postgres' or 'memory')")]
    UnknownStorage(String),
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every constraint a request body violated, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Field names in the order they were reported.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation: {0}")]
    Validation(ValidationErrors),
    #[error("{0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// A request the framework refused before it reached validation.
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// `{"detail": ...}` envelope shared by every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: Detail,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Fields(ValidationErrors),
}

/// Storage faults where the engine could not be reached at all.
fn is_unavailable(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed
    )
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Db(e) if is_unavailable(e) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected(status, _) => *status,
        }
    }

    fn detail(self) -> Detail {
        match self {
            AppError::Validation(errors) => Detail::Fields(errors),
            AppError::NotFound(kind) => Detail::Message(format!("{} not found", kind)),
            AppError::Conflict(message) | AppError::Rejected(_, message) => Detail::Message(message),
            AppError::Db(e) if is_unavailable(&e) => Detail::Message("Storage unavailable".into()),
            AppError::Db(_) | AppError::Config(_) => Detail::Message("Internal server error".into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_uses_fixed_detail() {
        let (status, body) = body_json(AppError::NotFound("Student")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Student not found"}));
    }

    #[tokio::test]
    async fn validation_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "must be at least 1 characters");
        errors.push("age", "must be at most 100");
        let (status, body) = body_json(errors.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"detail": [
                {"field": "name", "message": "must be at least 1 characters"},
                {"field": "age", "message": "must be at most 100"}
            ]})
        );
    }

    #[tokio::test]
    async fn storage_faults_hide_driver_text() {
        let (status, body) = body_json(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"detail": "Storage unavailable"}));

        let (status, body) = body_json(AppError::Db(sqlx::Error::Protocol("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Internal server error"}));
    }

    #[tokio::test]
    async fn missing_row_from_the_driver_is_a_server_error() {
        // Lookups use fetch_optional, so RowNotFound reaching here is a bug, not a 404.
        let (status, body) = body_json(AppError::Db(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Internal server error"}));
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::Conflict("Email already registered".into());
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn validation_display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "must be at least 5 characters");
        errors.push("age", "must be at least 16");
        assert_eq!(
            errors.to_string(),
            "email: must be at least 5 characters; age: must be at least 16"
        );
        assert_eq!(errors.fields(), vec!["email", "age"]);
    }
}
