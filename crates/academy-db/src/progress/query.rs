use academy_entity::progress::{self, Entity as UserProgress, Model as ProgressModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<ProgressModel>, DbErr> {
        UserProgress::find()
            .filter(progress::Column::UserId.eq(user_id))
            .order_by_asc(progress::Column::CourseId)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load user progress");
            })
    }

    pub async fn get<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: i32,
    ) -> Result<Option<ProgressModel>, DbErr> {
        UserProgress::find_by_id((user_id, course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, course_id, "failed to load progress");
            })
    }

    pub async fn completed_course_ids<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<i32>, DbErr> {
        let rows = UserProgress::find()
            .filter(progress::Column::UserId.eq(user_id))
            .filter(progress::Column::Completed.eq(true))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load completed courses");
            })?;
        Ok(rows.into_iter().map(|row| row.course_id).collect())
    }

    /// Courses the user has touched at all (`percent_complete > 0`).
    pub async fn count_started<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        UserProgress::find()
            .filter(progress::Column::UserId.eq(user_id))
            .filter(progress::Column::PercentComplete.gt(0))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to count started courses");
            })
    }
}
