use crate::permissions::Permission;
use crate::routes::api::v0::certificates::error::CertificateError;
use crate::user::ExtractUserId;
use academy_core::certificates;
use academy_model::certificate::{Certificate, GenerateCertificate};
use academy_model::convert::IntoModel;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use protect_axum::protect;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_certificates))
        .route("/generate", post(generate_certificate))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/certificates",
    responses(
        (status = OK, body = Vec<Certificate>, description = "Certificates issued to the user"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_certificates(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, CertificateError> {
    let certificates = academy_db::certificate::Query::for_user(&conn, user_id).await?;
    let certificates: Vec<Certificate> = certificates.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(certificates).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/certificates/generate",
    request_body = GenerateCertificate,
    responses(
        (status = OK, body = Certificate, description = "The certificate for the completed course"),
        (status = CONFLICT, description = "The course is not completed yet"),
    ),
    tag = "v0/certificates",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn generate_certificate(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Json(request): Json<GenerateCertificate>,
) -> Result<Response, CertificateError> {
    let certificate: Certificate = certificates::generate_certificate(&conn, user_id, request.course_id)
        .await?
        .into_model();
    Ok(Json(certificate).into_response())
}
