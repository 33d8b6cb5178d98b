use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum BadgeError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),
}

impl IntoResponse for BadgeError {
    fn into_response(self) -> Response {
        match self {
            BadgeError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
        }
    }
}
