use crate::unit::query::Query;
use crate::util::RequireRecord;
use academy_entity::unit::block::{self, BlockKind};
use academy_entity::unit::block_completion::{self, Entity as BlockCompletion, Model as BlockCompletionModel};
use academy_entity::unit::unit;
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, IntoActiveValue, TryInsertResult};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        name: String,
        description: Option<String>,
    ) -> Result<unit::Model, DbErr> {
        let unit = unit::ActiveModel {
            name: name.into_active_value(),
            description: description.into_active_value(),
            ..Default::default()
        };
        unit.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create unit");
        })
    }

    pub async fn create_block<C: ConnectionTrait>(
        conn: &C,
        unit_id: i32,
        kind: BlockKind,
        title: String,
        position: i32,
        xp_points: i32,
    ) -> Result<block::Model, DbErr> {
        let block = block::ActiveModel {
            unit_id: unit_id.into_active_value(),
            kind: ActiveValue::Set(kind),
            title: title.into_active_value(),
            position: position.into_active_value(),
            xp_points: xp_points.into_active_value(),
            ..Default::default()
        };
        block.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, unit_id, "failed to create learning block");
        })
    }

    /// Idempotent completion: a duplicate call returns the existing row and
    /// reports `newly = false` so XP is only credited once.
    pub async fn complete_block<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        block_id: i32,
    ) -> Result<(BlockCompletionModel, bool), DbErr> {
        let row = block_completion::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            block_id: ActiveValue::Set(block_id),
            completed: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        let mut on_conflict = OnConflict::columns([
            block_completion::Column::UserId,
            block_completion::Column::BlockId,
        ]);
        on_conflict.do_nothing();

        let res = BlockCompletion::insert(row)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, block_id, "failed to record block completion");
            })?;
        let newly = !matches!(res, TryInsertResult::Conflicted);

        let completion = Query::completion(conn, user_id, block_id).await.require()?;
        Ok((completion, newly))
    }
}
