use crate::progress::query::Query;
use crate::util::RequireRecord;
use academy_entity::progress::{self, Entity as UserProgress, Model as ProgressModel};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue;
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Insert-or-update on the (user, course) key; rows are created lazily on
    /// the first progress write.
    pub async fn upsert<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: i32,
        percent_complete: i32,
        completed: bool,
    ) -> Result<ProgressModel, DbErr> {
        let row = progress::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(course_id),
            percent_complete: ActiveValue::Set(percent_complete),
            completed: ActiveValue::Set(completed),
            last_accessed: ActiveValue::Set(Utc::now().naive_utc()),
        };
        let on_conflict = OnConflict::columns([progress::Column::UserId, progress::Column::CourseId])
            .update_columns([
                progress::Column::PercentComplete,
                progress::Column::Completed,
                progress::Column::LastAccessed,
            ])
            .to_owned();
        UserProgress::insert(row)
            .on_conflict(on_conflict)
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, course_id, "failed to upsert progress");
            })?;
        Query::get(conn, user_id, course_id).await.require()
    }
}
