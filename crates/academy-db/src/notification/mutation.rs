use academy_entity::notification::{self, Entity as Notification, Model as NotificationModel, NotificationKind};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::ActiveValue;
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
        metadata: Option<serde_json::Value>,
    ) -> Result<NotificationModel, DbErr> {
        let row = notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind),
            title: ActiveValue::Set(title),
            message: ActiveValue::Set(message),
            metadata: ActiveValue::Set(metadata),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        row.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to create notification");
        })
    }

    /// The returned count is zero when the notification does not belong to
    /// the user, which callers surface as not-found.
    pub async fn mark_read<C: ConnectionTrait>(conn: &C, user_id: Uuid, id: Uuid) -> Result<u64, DbErr> {
        let res = Notification::update_many()
            .col_expr(notification::Column::Read, true.into())
            .filter(notification::Column::Id.eq(id))
            .filter(notification::Column::UserId.eq(user_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %id, "failed to mark notification read");
            })?;
        Ok(res.rows_affected)
    }
}
