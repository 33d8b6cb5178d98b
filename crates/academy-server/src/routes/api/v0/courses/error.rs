use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CourseError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested course was not found.")]
    CourseNotFound,

    #[error("The requested unit was not found.")]
    UnitNotFound,
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        match self {
            CourseError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            CourseError::CourseNotFound => (StatusCode::NOT_FOUND, "Course not found").into_response(),
            CourseError::UnitNotFound => (StatusCode::NOT_FOUND, "Unit not found").into_response(),
        }
    }
}
