//! Request-scoped units of work against student storage.
//!
//! A [`SessionProvider`] hands out one [`StudentSession`] per request. The
//! session owns its connection and gives it back when dropped, so release
//! happens on every exit path including early returns and cancelled futures.

use crate::error::AppError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Open a session. Fails with a storage error if no connection is available.
    async fn acquire(&self) -> Result<Box<dyn StudentSession>, AppError>;

    /// Round-trip to storage without touching any rows.
    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait StudentSession: Send {
    /// All students, ordered by id.
    async fn list(&mut self) -> Result<Vec<Student>, AppError>;

    async fn find(&mut self, id: i32) -> Result<Option<Student>, AppError>;

    /// Insert and return the stored row with its assigned `id` and `created_at`.
    /// A duplicate email fails with [`AppError::Conflict`].
    async fn insert(&mut self, new: NewStudent) -> Result<Student, AppError>;

    /// Remove by id. Returns whether a row was deleted.
    async fn delete(&mut self, id: i32) -> Result<bool, AppError>;
}

/// Detail used for every duplicate-email rejection.
pub const DUPLICATE_EMAIL: &str = "Email already registered";
