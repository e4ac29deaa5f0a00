//! Request and response contracts for the students resource.
//!
//! These are kept apart from [`crate::model::Student`]: the record is what
//! storage holds, the schemas are what the API accepts and returns. The
//! mapping between them is written out by hand below.

use crate::model::Student;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /students`. Bounds are checked by [`StudentCreate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentCreate {
    #[schema(min_length = 1, max_length = 100, example = "Rahul Kumar")]
    pub name: String,
    #[schema(min_length = 5, max_length = 100, example = "rahul@example.com")]
    pub email: String,
    /// Wider than the column type so out-of-range input is reported as a bound
    /// violation instead of a decode failure.
    #[schema(minimum = 16, maximum = 100, example = 21)]
    pub age: i64,
}

/// A student as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        StudentResponse {
            id: s.id,
            name: s.name,
            email: s.email,
            age: s.age,
            created_at: s.created_at,
        }
    }
}
