pub mod session;
pub mod student;

pub use session::DbSession;
pub use student::{StudentId, StudentPayload};
