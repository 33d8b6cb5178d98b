use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ProgressError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested course was not found.")]
    CourseNotFound,
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        match self {
            ProgressError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            ProgressError::CourseNotFound => (StatusCode::NOT_FOUND, "Course not found").into_response(),
        }
    }
}
