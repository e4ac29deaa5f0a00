//! OpenAPI document served at `/openapi.json`.

use crate::error::FieldError;
use crate::handlers::health::{HealthBody, ReadyBody, RootBody};
use crate::schema::{StudentCreate, StudentResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student registry API",
        description = "Create, list, fetch, and delete student records."
    ),
    paths(
        crate::handlers::students::list,
        crate::handlers::students::read,
        crate::handlers::students::create,
        crate::handlers::students::delete,
        crate::handlers::health::root,
        crate::handlers::health::health,
        crate::handlers::health::ready,
    ),
    components(schemas(StudentCreate, StudentResponse, FieldError, RootBody, HealthBody, ReadyBody)),
    tags(
        (name = "students", description = "Student records"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_student_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/students", "/students/{id}", "/", "/health", "/ready"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("StudentResponse"));
        assert!(components.schemas.contains_key("StudentCreate"));
    }
}
