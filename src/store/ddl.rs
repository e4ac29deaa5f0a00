//! Database and table bootstrap run once at startup.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// `VARCHAR(n)` and `char_length` count characters, matching request validation.
const CREATE_STUDENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL CHECK (char_length(name) >= 1),
        email VARCHAR(100) NOT NULL UNIQUE CHECK (char_length(email) >= 5),
        age INTEGER NOT NULL CHECK (age BETWEEN 16 AND 100),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create the `students` table if it does not exist yet.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_STUDENTS).execute(pool).await?;
    tracing::info!("students table ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|_| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::Invalid {
        key: "DATABASE_URL",
        value: url.to_string(),
    };
    let scheme_end = url.find("://").ok_or_else(invalid)? + 3;
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(invalid)?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
