use crate::permissions::Permission;
use crate::routes::api::v0::units::error::UnitError;
use academy_model::convert::{IntoDbModel, IntoModel};
use academy_model::unit::{Block, NewBlock, NewUnit, Unit, UnitDetail};
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use futures::TryFutureExt;
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;
use tokio::try_join;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create_unit))
        .route("/{unit_id}", get(get_unit))
        .route("/{unit_id}/blocks", post(create_block))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/api/v0/units",
    request_body = NewUnit,
    responses(
        (status = CREATED, body = Unit, description = "The created unit"),
    ),
    tag = "v0/units",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_unit(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_unit): Json<NewUnit>,
) -> Result<Response, UnitError> {
    let unit: Unit = academy_db::unit::Mutation::create(&conn, new_unit.name, new_unit.description)
        .await?
        .into_model();
    Ok((StatusCode::CREATED, Json(unit)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/units/{unit_id}",
    responses(
        (status = OK, body = UnitDetail, description = "The unit with its blocks and assessments"),
        (status = NOT_FOUND, description = "Unknown unit"),
    ),
    tag = "v0/units",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_unit(
    Extension(conn): Extension<DatabaseConnection>,
    Path(unit_id): Path<i32>,
) -> Result<Response, UnitError> {
    let (unit, blocks, assessments) = try_join!(
        academy_db::unit::Query::by_id(&conn, unit_id).map_err(UnitError::from),
        academy_db::unit::Query::blocks(&conn, unit_id).map_err(UnitError::from),
        academy_db::assessment::Query::for_unit(&conn, unit_id).map_err(UnitError::from),
    )?;
    let unit = unit.ok_or(UnitError::UnitNotFound)?;

    let detail: UnitDetail = (unit, blocks, assessments).into_model();
    Ok(Json(detail).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/units/{unit_id}/blocks",
    request_body = NewBlock,
    responses(
        (status = CREATED, body = Block, description = "The created learning block"),
        (status = NOT_FOUND, description = "Unknown unit"),
    ),
    tag = "v0/units",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_block(
    Extension(conn): Extension<DatabaseConnection>,
    Path(unit_id): Path<i32>,
    Json(new_block): Json<NewBlock>,
) -> Result<Response, UnitError> {
    academy_db::unit::Query::by_id(&conn, unit_id)
        .await?
        .ok_or(UnitError::UnitNotFound)?;

    let block: Block = academy_db::unit::Mutation::create_block(
        &conn,
        unit_id,
        new_block.kind.into_db_model(),
        new_block.title,
        new_block.position,
        new_block.xp_points,
    )
    .await?
    .into_model();
    Ok((StatusCode::CREATED, Json(block)).into_response())
}
