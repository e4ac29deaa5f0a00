//! Session providers for student storage, plus startup DDL.

mod ddl;
mod memory;
mod postgres;

pub use ddl::{ensure_database_exists, ensure_students_table};
pub use memory::{MemorySession, MemorySessionProvider};
pub use postgres::{PgSession, PgSessionProvider};
