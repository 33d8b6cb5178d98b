use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum UserError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested user was not found.")]
    UserNotFound,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            UserError::UserNotFound => (StatusCode::NOT_FOUND, "User not found").into_response(),
        }
    }
}
