//! PostgreSQL sessions over a shared `sqlx` pool.

use crate::error::AppError;
use crate::model::{NewStudent, Student};
use crate::session::{SessionProvider, StudentSession, DUPLICATE_EMAIL};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};

const SELECT_ALL: &str = "SELECT id, name, email, age, created_at FROM students ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, age, created_at FROM students WHERE id = $1";
const INSERT: &str = "INSERT INTO students (name, email, age) VALUES ($1, $2, $3) \
                      RETURNING id, name, email, age, created_at";
const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = $1";

/// Hands out one pooled connection per request.
#[derive(Clone)]
pub struct PgSessionProvider {
    pool: PgPool,
}

impl PgSessionProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionProvider for PgSessionProvider {
    async fn acquire(&self) -> Result<Box<dyn StudentSession>, AppError> {
        let conn = self.pool.acquire().await?;
        tracing::trace!("session acquired");
        Ok(Box::new(PgSession { conn }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// A checked-out connection. Dropping it returns the connection to the pool.
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

impl Drop for PgSession {
    fn drop(&mut self) {
        tracing::trace!("session released");
    }
}

#[async_trait]
impl StudentSession for PgSession {
    async fn list(&mut self) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Student>(SELECT_ALL)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(rows)
    }

    async fn find(&mut self, id: i32) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(row)
    }

    async fn insert(&mut self, new: NewStudent) -> Result<Student, AppError> {
        tracing::debug!(sql = %INSERT, email = %new.email, "query");
        sqlx::query_as::<_, Student>(INSERT)
            .bind(&new.name)
            .bind(&new.email)
            .bind(new.age)
            .fetch_one(&mut *self.conn)
            .await
            .map_err(insert_error)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %DELETE_BY_ID, id, "query");
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// The only unique column an insert can collide on is `email`.
fn insert_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::Conflict(DUPLICATE_EMAIL.into());
        }
    }
    AppError::Db(e)
}
