//! Field bounds for incoming students.

use crate::error::ValidationErrors;
use crate::model::NewStudent;
use crate::schema::StudentCreate;

pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MIN_LEN: usize = 5;
pub const EMAIL_MAX_LEN: usize = 100;
pub const AGE_MIN: i64 = 16;
pub const AGE_MAX: i64 = 100;

impl StudentCreate {
    /// Check every bound and, if all hold, produce the insert payload.
    /// All violations are reported together.
    pub fn validate(self) -> Result<NewStudent, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "name", &self.name, NAME_MIN_LEN, NAME_MAX_LEN);
        check_length(&mut errors, "email", &self.email, EMAIL_MIN_LEN, EMAIL_MAX_LEN);
        check_range(&mut errors, "age", self.age, AGE_MIN, AGE_MAX);

        let age = match i32::try_from(self.age) {
            Ok(age) if errors.is_empty() => age,
            _ => return Err(errors),
        };
        Ok(NewStudent {
            name: self.name,
            email: self.email,
            age,
        })
    }
}

// Lengths are in characters, so multi-byte names are not penalised.
fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min {
        errors.push(field, format!("must be at least {} characters", min));
    } else if len > max {
        errors.push(field, format!("must be at most {} characters", max));
    }
}

fn check_range(errors: &mut ValidationErrors, field: &str, value: i64, min: i64, max: i64) {
    if value < min {
        errors.push(field, format!("must be at least {}", min));
    } else if value > max {
        errors.push(field, format!("must be at most {}", max));
    }
}
