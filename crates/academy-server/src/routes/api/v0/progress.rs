use crate::permissions::Permission;
use crate::routes::api::v0::progress::error::ProgressError;
use crate::user::ExtractUserId;
use academy_core::progress;
use academy_model::convert::IntoModel;
use academy_model::progress::{Progress, ProgressUpdate};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use protect_axum::protect;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_progress).post(record_progress))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/progress",
    responses(
        (status = OK, body = Vec<Progress>, description = "Per-course progress for the user"),
    ),
    tag = "v0/progress",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_progress(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, ProgressError> {
    let rows = academy_db::progress::Query::for_user(&conn, user_id).await?;
    let rows: Vec<Progress> = rows.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(rows).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/progress",
    request_body = ProgressUpdate,
    responses(
        (status = OK, body = Progress, description = "The stored progress row"),
        (status = NOT_FOUND, description = "Unknown course"),
    ),
    tag = "v0/progress",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn record_progress(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Json(update): Json<ProgressUpdate>,
) -> Result<Response, ProgressError> {
    academy_db::course::Query::by_id(&conn, update.course_id)
        .await?
        .ok_or(ProgressError::CourseNotFound)?;

    let row: Progress =
        progress::record_progress(&conn, user_id, update.course_id, update.percent_complete, update.completed)
            .await?
            .into_model();
    Ok(Json(row).into_response())
}
