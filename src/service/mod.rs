//! StudentService and input validation.

mod students;
mod validation;
pub use students::StudentService;
pub use validation::{AGE_MAX, AGE_MIN, EMAIL_MAX_LEN, EMAIL_MIN_LEN, NAME_MAX_LEN, NAME_MIN_LEN};
