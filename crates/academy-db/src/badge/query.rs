use academy_entity::badge::badge::{self, BadgeKind, Entity as Badge, Model as BadgeModel};
use academy_entity::badge::user_badge::{self, Entity as UserBadge, Model as UserBadgeModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn catalog<C: ConnectionTrait>(conn: &C) -> Result<Vec<BadgeModel>, DbErr> {
        Badge::find()
            .filter(badge::Column::Active.eq(true))
            .order_by_asc(badge::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load badge catalog");
            })
    }

    pub async fn by_kind<C: ConnectionTrait>(conn: &C, kind: BadgeKind) -> Result<Vec<BadgeModel>, DbErr> {
        Badge::find()
            .filter(badge::Column::Kind.eq(kind))
            .filter(badge::Column::Active.eq(true))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load badges by kind");
            })
    }

    pub async fn held<C: ConnectionTrait>(conn: &C, user_id: Uuid, badge_id: i32) -> Result<bool, DbErr> {
        let row = UserBadge::find_by_id((user_id, badge_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, badge_id, "failed to check badge");
            })?;
        Ok(row.is_some())
    }

    pub async fn for_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<(UserBadgeModel, BadgeModel)>, DbErr> {
        let rows = UserBadge::find()
            .filter(user_badge::Column::UserId.eq(user_id))
            .find_also_related(Badge)
            .order_by_asc(user_badge::Column::EarnedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load user badges");
            })?;
        Ok(rows
            .into_iter()
            .filter_map(|(earned, badge)| badge.map(|badge| (earned, badge)))
            .collect())
    }
}
