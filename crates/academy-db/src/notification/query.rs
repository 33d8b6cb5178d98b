use academy_entity::notification::{self, Entity as Notification, Model as NotificationModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<NotificationModel>, DbErr> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load notifications");
            })
    }
}
