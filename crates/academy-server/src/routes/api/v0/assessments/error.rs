use academy_core::assessments::AssessmentError as CoreAssessmentError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AssessmentError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested assessment was not found.")]
    AssessmentNotFound,

    #[error("No attempts remaining for this assessment.")]
    NoAttemptsRemaining,

    #[error("The score must be between 0 and 100.")]
    ScoreOutOfRange,
}

impl From<CoreAssessmentError> for AssessmentError {
    fn from(error: CoreAssessmentError) -> Self {
        match error {
            CoreAssessmentError::NotFound => AssessmentError::AssessmentNotFound,
            CoreAssessmentError::NoAttemptsRemaining => AssessmentError::NoAttemptsRemaining,
            CoreAssessmentError::Db(e) => AssessmentError::SeaOrmError(e),
        }
    }
}

impl IntoResponse for AssessmentError {
    fn into_response(self) -> Response {
        match self {
            AssessmentError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            AssessmentError::AssessmentNotFound => (StatusCode::NOT_FOUND, "Assessment not found").into_response(),
            AssessmentError::NoAttemptsRemaining => {
                (StatusCode::CONFLICT, "No attempts remaining for this assessment").into_response()
            }
            AssessmentError::ScoreOutOfRange => {
                (StatusCode::BAD_REQUEST, "The score must be between 0 and 100").into_response()
            }
        }
    }
}
