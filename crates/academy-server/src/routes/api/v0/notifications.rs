use crate::permissions::Permission;
use crate::routes::api::v0::notifications::error::NotificationError;
use crate::user::ExtractUserId;
use academy_model::convert::IntoModel;
use academy_model::notification::Notification;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_notifications))
        .route("/{notification_id}/read", post(mark_read))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/notifications",
    responses(
        (status = OK, body = Vec<Notification>, description = "Notifications for the user, newest first"),
    ),
    tag = "v0/notifications",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_notifications(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, NotificationError> {
    let notifications = academy_db::notification::Query::for_user(&conn, user_id).await?;
    let notifications: Vec<Notification> = notifications.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(notifications).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/notifications/{notification_id}/read",
    responses(
        (status = NO_CONTENT, description = "Notification marked as read"),
        (status = NOT_FOUND, description = "Unknown notification, or one that belongs to another user"),
    ),
    tag = "v0/notifications",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn mark_read(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(notification_id): Path<Uuid>,
) -> Result<Response, NotificationError> {
    let updated = academy_db::notification::Mutation::mark_read(&conn, user_id, notification_id).await?;
    if updated == 0 {
        return Err(NotificationError::NotificationNotFound);
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
