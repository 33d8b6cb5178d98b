use academy_core::certificates::CertificateError as CoreCertificateError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CertificateError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("The course is not completed yet.")]
    NotEligible,
}

impl From<CoreCertificateError> for CertificateError {
    fn from(error: CoreCertificateError) -> Self {
        match error {
            CoreCertificateError::NotEligible => CertificateError::NotEligible,
            CoreCertificateError::Db(e) => CertificateError::SeaOrmError(e),
        }
    }
}

impl IntoResponse for CertificateError {
    fn into_response(self) -> Response {
        match self {
            CertificateError::SeaOrmError(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}")).into_response()
            }
            CertificateError::NotEligible => (StatusCode::CONFLICT, "The course is not completed yet").into_response(),
        }
    }
}
