use academy_entity::unit::block::{self, Entity as Block, Model as BlockModel};
use academy_entity::unit::block_completion::{self, Entity as BlockCompletion, Model as BlockCompletionModel};
use academy_entity::unit::unit::{Entity as Unit, Model as UnitModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn by_id<C: ConnectionTrait>(conn: &C, unit_id: i32) -> Result<Option<UnitModel>, DbErr> {
        Unit::find_by_id(unit_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, unit_id, "failed to load unit");
        })
    }

    pub async fn blocks<C: ConnectionTrait>(conn: &C, unit_id: i32) -> Result<Vec<BlockModel>, DbErr> {
        Block::find()
            .filter(block::Column::UnitId.eq(unit_id))
            .order_by_asc(block::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, unit_id, "failed to load unit blocks");
            })
    }

    pub async fn block_by_id<C: ConnectionTrait>(conn: &C, block_id: i32) -> Result<Option<BlockModel>, DbErr> {
        Block::find_by_id(block_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, block_id, "failed to load block");
        })
    }

    /// Which of the given blocks the user has completed.
    pub async fn completed_block_ids<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        block_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if block_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = BlockCompletion::find()
            .filter(block_completion::Column::UserId.eq(user_id))
            .filter(block_completion::Column::BlockId.is_in(block_ids.iter().copied()))
            .filter(block_completion::Column::Completed.eq(true))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load block completions");
            })?;
        Ok(rows.into_iter().map(|row| row.block_id).collect())
    }

    pub async fn completion<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        block_id: i32,
    ) -> Result<Option<BlockCompletionModel>, DbErr> {
        BlockCompletion::find_by_id((user_id, block_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, block_id, "failed to load block completion");
            })
    }

    pub async fn count_completed<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        BlockCompletion::find()
            .filter(block_completion::Column::UserId.eq(user_id))
            .filter(block_completion::Column::Completed.eq(true))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to count block completions");
            })
    }
}
