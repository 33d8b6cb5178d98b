use crate::permissions::Permission;
use crate::routes::api::v0::badges::error::BadgeError;
use crate::user::ExtractUserId;
use academy_model::badge::{Badge, EarnedBadge, NewBadge};
use academy_model::convert::{IntoDbModel, IntoModel};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_catalog).post(create_badge))
        .route("/mine", get(get_earned_badges))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/badges",
    responses(
        (status = OK, body = Vec<Badge>, description = "The active badge catalog"),
    ),
    tag = "v0/badges",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_catalog(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, BadgeError> {
    let badges = academy_db::badge::Query::catalog(&conn).await?;
    let badges: Vec<Badge> = badges.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(badges).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/badges/mine",
    responses(
        (status = OK, body = Vec<EarnedBadge>, description = "Badges the user has earned, oldest first"),
    ),
    tag = "v0/badges",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_earned_badges(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, BadgeError> {
    let earned = academy_db::badge::Query::for_user(&conn, user_id).await?;
    let earned: Vec<EarnedBadge> = earned
        .into_iter()
        .map(|(user_badge, badge)| (badge, user_badge).into_model())
        .collect();
    Ok(Json(earned).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/badges",
    request_body = NewBadge,
    responses(
        (status = CREATED, body = Badge, description = "The created badge"),
    ),
    tag = "v0/badges",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_badge(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_badge): Json<NewBadge>,
) -> Result<Response, BadgeError> {
    let badge: Badge = academy_db::badge::Mutation::create(
        &conn,
        new_badge.name,
        new_badge.description,
        new_badge.kind.into_db_model(),
        new_badge.xp_points,
    )
    .await?
    .into_model();
    Ok((StatusCode::CREATED, Json(badge)).into_response())
}
