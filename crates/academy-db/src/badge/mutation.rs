use academy_entity::badge::badge::{self, BadgeKind, Model as BadgeModel};
use academy_entity::badge::user_badge::{self, Entity as UserBadge};
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
        kind: BadgeKind,
        xp_points: i32,
    ) -> Result<BadgeModel, DbErr> {
        let row = badge::ActiveModel {
            name: name.into_active_value(),
            description: description.into_active_value(),
            kind: ActiveValue::Set(kind),
            xp_points: xp_points.into_active_value(),
            active: ActiveValue::Set(true),
            ..Default::default()
        };
        row.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create badge");
        })
    }

    /// Returns whether the badge was newly awarded. A concurrent award races
    /// into the (user, badge) primary key; the conflicted loser sees `false`
    /// and must not credit anything.
    pub async fn award<C: ConnectionTrait>(conn: &C, user_id: Uuid, badge_id: i32) -> Result<bool, DbErr> {
        let row = user_badge::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            badge_id: ActiveValue::Set(badge_id),
            earned_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        let mut on_conflict = OnConflict::columns([user_badge::Column::UserId, user_badge::Column::BadgeId]);
        on_conflict.do_nothing();

        let res = UserBadge::insert(row)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, badge_id, "failed to award badge");
            })?;
        Ok(!matches!(res, TryInsertResult::Conflicted))
    }
}
