//! Persisted shape of a student row.

use chrono::{DateTime, Utc};

/// A stored student. `id` and `created_at` are assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a student that already passed validation.
///
/// Only [`StudentCreate::validate`](crate::schema::StudentCreate::validate)
/// builds one, so storage never sees an out-of-bounds record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) age: i32,
}

impl NewStudent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
