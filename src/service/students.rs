//! Student operations over a single session.

use crate::error::AppError;
use crate::model::{NewStudent, Student};
use crate::schema::StudentResponse;
use crate::session::StudentSession;

pub struct StudentService;

impl StudentService {
    pub async fn list(session: &mut dyn StudentSession) -> Result<Vec<StudentResponse>, AppError> {
        let rows = session.list().await?;
        Ok(rows.into_iter().map(StudentResponse::from).collect())
    }

    pub async fn get(session: &mut dyn StudentSession, id: i32) -> Result<StudentResponse, AppError> {
        let student = find_existing(session, id).await?;
        Ok(student.into())
    }

    /// Insert and shape the stored row, so `id` and `created_at` come from storage.
    pub async fn create(
        session: &mut dyn StudentSession,
        new: NewStudent,
    ) -> Result<StudentResponse, AppError> {
        let student = match session.insert(new).await {
            Ok(student) => student,
            Err(AppError::Conflict(detail)) => {
                tracing::warn!(%detail, "student rejected");
                return Err(AppError::Conflict(detail));
            }
            Err(e) => return Err(e),
        };
        tracing::info!(student_id = student.id, "student created");
        Ok(student.into())
    }

    pub async fn delete(session: &mut dyn StudentSession, id: i32) -> Result<(), AppError> {
        let student = find_existing(session, id).await?;
        // A concurrent delete can win between the lookup and this statement.
        if !session.delete(student.id).await? {
            return Err(AppError::NotFound("Student"));
        }
        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }
}

async fn find_existing(session: &mut dyn StudentSession, id: i32) -> Result<Student, AppError> {
    session.find(id).await?.ok_or(AppError::NotFound("Student"))
}
