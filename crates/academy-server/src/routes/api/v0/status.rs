use academy_model::status::{ComponentState, Status};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, body = Status, description = "All components are healthy"),
        (status = INTERNAL_SERVER_ERROR, body = Status, description = "A component is unavailable"),
    ),
    tag = "v0/status"
)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> Response {
    let database: ComponentState = conn.ping().await.into();
    let code = if database.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (code, Json(Status { database })).into_response()
}
