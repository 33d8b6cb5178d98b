use crate::permissions::Permission;
use crate::routes::api::v0::users::error::UserError;
use crate::user::ExtractUser;
use academy_model::convert::{IntoDbModel, IntoModel};
use academy_model::user::{CreatedUser, NewUser, RoleUpdate, User};
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
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
        .route("/", get(list_users).post(create_user))
        .route("/me", get(get_me))
        .route("/{user_id}/role", patch(set_role))
        .route("/{user_id}", delete(delete_user))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/users/me",
    responses(
        (status = OK, body = User, description = "The authenticated user"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_me(ExtractUser(user): ExtractUser) -> Response {
    Json(user).into_response()
}

#[utoipa::path(
    get,
    path = "/api/v0/users",
    responses(
        (status = OK, body = Vec<User>, description = "All registered users"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn list_users(Extension(conn): Extension<DatabaseConnection>) -> Result<Response, UserError> {
    let users = academy_db::user::Query::all(&conn).await?;
    let users: Vec<User> = users.into_iter().map(IntoModel::into_model).collect();
    Ok(Json(users).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/users",
    request_body = NewUser,
    responses(
        (status = CREATED, body = CreatedUser, description = "The created user and its access token"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_user(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_user): Json<NewUser>,
) -> Result<Response, UserError> {
    let user = academy_db::user::Mutation::create(&conn, new_user.name, new_user.email, new_user.role.into_db_model())
        .await?;
    let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    academy_db::user::Mutation::create_token(&conn, user.id, token.clone()).await?;

    let created = CreatedUser {
        user: user.into_model(),
        token,
    };
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/v0/users/{user_id}/role",
    request_body = RoleUpdate,
    responses(
        (status = NO_CONTENT, description = "Role updated"),
        (status = NOT_FOUND, description = "Unknown user"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn set_role(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
    Json(update): Json<RoleUpdate>,
) -> Result<Response, UserError> {
    academy_db::user::Query::find_by_id(&conn, user_id)
        .await?
        .ok_or(UserError::UserNotFound)?;
    academy_db::user::Mutation::set_role(&conn, user_id, update.role.into_db_model()).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/v0/users/{user_id}",
    responses(
        (status = NO_CONTENT, description = "User and all dependent records deleted"),
        (status = NOT_FOUND, description = "Unknown user"),
    ),
    tag = "v0/users",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_user(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, UserError> {
    let deleted = academy_db::user::Mutation::delete(&conn, user_id).await?;
    if deleted == 0 {
        return Err(UserError::UserNotFound);
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
