use academy_entity::assessment::assessment::{self, Model as AssessmentModel};
use academy_entity::assessment::attempt::{self, Model as AttemptModel};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue, IntoActiveValue};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    #[allow(clippy::too_many_arguments)]
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        unit_id: Option<i32>,
        course_id: Option<i32>,
        title: String,
        passing_score: i32,
        xp_points: i32,
        max_retakes: i32,
    ) -> Result<AssessmentModel, DbErr> {
        let assessment = assessment::ActiveModel {
            unit_id: unit_id.into_active_value(),
            course_id: course_id.into_active_value(),
            title: title.into_active_value(),
            passing_score: passing_score.into_active_value(),
            xp_points: xp_points.into_active_value(),
            max_retakes: max_retakes.into_active_value(),
            ..Default::default()
        };
        assessment.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create assessment");
        })
    }

    /// Append-only; retake limits are enforced by the caller before insert.
    pub async fn record_attempt<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        assessment_id: i32,
        score: i32,
        passed: bool,
        answers: serde_json::Value,
    ) -> Result<AttemptModel, DbErr> {
        let attempt = attempt::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            assessment_id: assessment_id.into_active_value(),
            score: score.into_active_value(),
            passed: passed.into_active_value(),
            answers: ActiveValue::Set(answers),
            completed_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        attempt.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, assessment_id, "failed to record attempt");
        })
    }
}
