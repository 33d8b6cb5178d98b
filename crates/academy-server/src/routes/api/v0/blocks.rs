use crate::permissions::Permission;
use crate::routes::api::v0::blocks::error::BlockError;
use crate::user::ExtractUserId;
use academy_core::progress;
use academy_model::unit::CompletedBlock;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use protect_axum::protect;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/{block_id}/complete", post(complete_block))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/api/v0/blocks/{block_id}/complete",
    responses(
        (status = OK, body = CompletedBlock, description = "Completion state of the block for the user"),
        (status = NOT_FOUND, description = "Unknown learning block"),
    ),
    tag = "v0/blocks",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn complete_block(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(block_id): Path<i32>,
) -> Result<Response, BlockError> {
    let outcome = progress::complete_block(&conn, user_id, block_id).await?;

    let completed = CompletedBlock {
        block_id: outcome.completion.block_id,
        already_completed: !outcome.newly_completed,
        xp_awarded: outcome.xp_awarded,
    };
    Ok(Json(completed).into_response())
}
