//! Student registry: a REST resource for student records backed by PostgreSQL.

pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod session;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError, FieldError, ValidationErrors};
pub use model::{NewStudent, Student};
pub use routes::{app, common_routes, student_routes};
pub use schema::{StudentCreate, StudentResponse};
pub use service::StudentService;
pub use session::{SessionProvider, StudentSession};
pub use settings::{Settings, StorageKind};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_students_table, MemorySessionProvider, PgSessionProvider};
