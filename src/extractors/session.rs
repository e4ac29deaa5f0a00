//! Per-request storage session.

use crate::error::AppError;
use crate::session::StudentSession;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// A session acquired for the current request. Dropped, and so released,
/// when the handler returns.
pub struct DbSession(pub Box<dyn StudentSession>);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.sessions.acquire().await?;
        Ok(DbSession(session))
    }
}
