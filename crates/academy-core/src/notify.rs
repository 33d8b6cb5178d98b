use academy_entity::notification::{Model as NotificationModel, NotificationKind};
use sea_orm::{ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

/// Fallible insert, for use inside transactions where the notification must
/// commit or roll back together with the rest of the unit of work.
pub async fn create<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    kind: NotificationKind,
    title: String,
    message: String,
    metadata: Option<serde_json::Value>,
) -> Result<NotificationModel, DbErr> {
    academy_db::notification::Mutation::create(conn, user_id, kind, title, message, metadata).await
}

/// Fire-and-forget variant. Notification delivery is not critical path, so
/// a failed insert is logged and swallowed.
pub async fn emit<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    kind: NotificationKind,
    title: String,
    message: String,
    metadata: Option<serde_json::Value>,
) {
    if let Err(error) = create(conn, user_id, kind, title, message, metadata).await {
        tracing::warn!(error = &error as &dyn Error, %user_id, "notification dropped");
    }
}
