//! Path id and body extractors that reject with field-level validation errors.

use crate::error::{AppError, ValidationErrors};
use crate::model::NewStudent;
use crate::schema::StudentCreate;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use std::error::Error as StdError;

/// `{id}` path segment parsed as a student id.
#[derive(Clone, Copy, Debug)]
pub struct StudentId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationErrors::single("id", rejection.body_text()))?;
        Ok(StudentId(id))
    }
}

/// A `StudentCreate` body that decoded and passed every bound check.
#[derive(Debug)]
pub struct StudentPayload(pub NewStudent);

#[async_trait]
impl<S> FromRequest<S> for StudentPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<StudentCreate>::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        Ok(StudentPayload(body.validate()?))
    }
}

/// Undecodable bodies are validation failures; failures to read the body
/// (too large, aborted) keep the status axum chose.
fn body_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(ref err) => match field_failure(err) {
            Some((field, message)) => ValidationErrors::single(&field, message).into(),
            None => ValidationErrors::single("body", rejection.body_text()).into(),
        },
        JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
            ValidationErrors::single("body", rejection.body_text()).into()
        }
        other => AppError::Rejected(other.status(), other.body_text()),
    }
}

type PathError = serde_path_to_error::Error<serde_json::Error>;

/// The field a decode failure belongs to, from the path axum's JSON
/// extractor records. Missing fields fail at the root, so their name is
/// taken from serde's message.
fn field_failure(err: &(dyn StdError + 'static)) -> Option<(String, String)> {
    let failure = std::iter::successors(Some(err), |&e| e.source())
        .find_map(|e| e.downcast_ref::<PathError>())?;
    let message = failure.inner().to_string();
    let path = failure.path().to_string();
    if path != "." {
        return Some((path, message));
    }
    let missing = message.strip_prefix("missing field `")?.split('`').next()?;
    Some((missing.to_string(), "field required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header;

    async fn decode(body: &str) -> AppError {
        let req = axum::http::Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        StudentPayload::from_request(req, &()).await.unwrap_err()
    }

    fn fields(err: AppError) -> Vec<(String, String)> {
        match err {
            AppError::Validation(errors) => errors
                .errors()
                .iter()
                .map(|e| (e.field.clone(), e.message.clone()))
                .collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_named() {
        let got = fields(decode(r#"{"name":"Rahul","email":"rahul@example.com"}"#).await);
        assert_eq!(got, vec![("age".to_string(), "field required".to_string())]);
    }

    #[tokio::test]
    async fn mistyped_field_is_named() {
        let got = fields(decode(r#"{"name":"Rahul","email":"rahul@example.com","age":"21"}"#).await);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].0, "age");
        assert!(got[0].1.contains("invalid type"));
    }

    #[tokio::test]
    async fn syntax_errors_fall_back_to_body() {
        let got = fields(decode("{not json").await);
        assert_eq!(got[0].0, "body");
    }
}
