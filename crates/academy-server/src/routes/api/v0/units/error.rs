use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum UnitError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The requested unit was not found.")]
    UnitNotFound,
}

impl IntoResponse for UnitError {
    fn into_response(self) -> Response {
        match self {
            UnitError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            UnitError::UnitNotFound => (StatusCode::NOT_FOUND, "Unit not found").into_response(),
        }
    }
}
