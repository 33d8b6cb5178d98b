use academy_entity::assessment::assessment::{self, Entity as Assessment, Model as AssessmentModel};
use academy_entity::assessment::attempt::{self, Entity as Attempt, Model as AttemptModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn by_id<C: ConnectionTrait>(conn: &C, assessment_id: i32) -> Result<Option<AssessmentModel>, DbErr> {
        Assessment::find_by_id(assessment_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, assessment_id, "failed to load assessment");
        })
    }

    pub async fn for_unit<C: ConnectionTrait>(conn: &C, unit_id: i32) -> Result<Vec<AssessmentModel>, DbErr> {
        Assessment::find()
            .filter(assessment::Column::UnitId.eq(unit_id))
            .order_by_asc(assessment::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, unit_id, "failed to load unit assessments");
            })
    }

    /// Course-level assessments (attached directly, `unit_id` null).
    pub async fn for_course<C: ConnectionTrait>(conn: &C, course_id: i32) -> Result<Vec<AssessmentModel>, DbErr> {
        Assessment::find()
            .filter(assessment::Column::CourseId.eq(course_id))
            .filter(assessment::Column::UnitId.is_null())
            .order_by_asc(assessment::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, course_id, "failed to load course assessments");
            })
    }

    pub async fn attempts<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
    ) -> Result<Vec<AttemptModel>, DbErr> {
        Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::AssessmentId.eq(assessment_id))
            .order_by_asc(attempt::Column::CompletedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, assessment_id, "failed to load attempts");
            })
    }

    pub async fn count_attempts<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
    ) -> Result<u64, DbErr> {
        Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::AssessmentId.eq(assessment_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, assessment_id, "failed to count attempts");
            })
    }

    pub async fn passed_exists<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
    ) -> Result<bool, DbErr> {
        let count = Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::AssessmentId.eq(assessment_id))
            .filter(attempt::Column::Passed.eq(true))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, assessment_id, "failed to check passes");
            })?;
        Ok(count > 0)
    }

    /// Every passed attempt across all assessments, for badge predicates.
    pub async fn passed_attempts<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<AttemptModel>, DbErr> {
        Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::Passed.eq(true))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load passed attempts");
            })
    }
}
