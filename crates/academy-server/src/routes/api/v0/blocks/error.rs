use academy_core::progress::ProgressError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum BlockError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested learning block was not found.")]
    BlockNotFound,
}

impl From<ProgressError> for BlockError {
    fn from(error: ProgressError) -> Self {
        match error {
            ProgressError::BlockNotFound => BlockError::BlockNotFound,
            ProgressError::Db(e) => BlockError::SeaOrmError(e),
        }
    }
}

impl IntoResponse for BlockError {
    fn into_response(self) -> Response {
        match self {
            BlockError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            BlockError::BlockNotFound => (StatusCode::NOT_FOUND, "Learning block not found").into_response(),
        }
    }
}
