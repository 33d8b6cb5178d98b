use crate::permissions::Permission;
use crate::routes::api::v0::assessments::error::AssessmentError;
use crate::user::ExtractUserId;
use academy_core::assessments;
use academy_model::assessment::{Assessment, AttemptOutcome, AttemptSubmission, NewAssessment};
use academy_model::convert::IntoModel;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use http::StatusCode;
use protect_axum::protect;
use sea_orm::DatabaseConnection;

mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create_assessment))
        .route("/{assessment_id}", get(get_assessment))
        .route("/{assessment_id}/submit", post(submit_assessment))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/assessments/{assessment_id}",
    responses(
        (status = OK, body = Assessment, description = "A single assessment"),
        (status = NOT_FOUND, description = "Unknown assessment"),
    ),
    tag = "v0/assessments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn get_assessment(
    Extension(conn): Extension<DatabaseConnection>,
    Path(assessment_id): Path<i32>,
) -> Result<Response, AssessmentError> {
    let assessment: Assessment = academy_db::assessment::Query::by_id(&conn, assessment_id)
        .await?
        .ok_or(AssessmentError::AssessmentNotFound)?
        .into_model();
    Ok(Json(assessment).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/assessments",
    request_body = NewAssessment,
    responses(
        (status = CREATED, body = Assessment, description = "The created assessment"),
    ),
    tag = "v0/assessments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Manage", ty = "Permission")]
pub(crate) async fn create_assessment(
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_assessment): Json<NewAssessment>,
) -> Result<Response, AssessmentError> {
    let assessment: Assessment = academy_db::assessment::Mutation::create(
        &conn,
        new_assessment.unit_id,
        new_assessment.course_id,
        new_assessment.title,
        new_assessment.passing_score,
        new_assessment.xp_points,
        new_assessment.max_retakes,
    )
    .await?
    .into_model();
    Ok((StatusCode::CREATED, Json(assessment)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/assessments/{assessment_id}/submit",
    request_body = AttemptSubmission,
    responses(
        (status = OK, body = AttemptOutcome, description = "The recorded attempt with its outcome"),
        (status = BAD_REQUEST, description = "Score out of range"),
        (status = NOT_FOUND, description = "Unknown assessment"),
        (status = CONFLICT, description = "No attempts remaining"),
    ),
    tag = "v0/assessments",
    security(
        ("token" = [])
    )
)]
#[protect("Permission::Basic", ty = "Permission")]
pub(crate) async fn submit_assessment(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(assessment_id): Path<i32>,
    Json(submission): Json<AttemptSubmission>,
) -> Result<Response, AssessmentError> {
    if !(0..=100).contains(&submission.score) {
        return Err(AssessmentError::ScoreOutOfRange);
    }

    let outcome =
        assessments::submit_assessment(&conn, user_id, assessment_id, submission.score, submission.answers).await?;

    let outcome = AttemptOutcome {
        attempt: outcome.attempt.into_model(),
        passed: outcome.passed,
        message: outcome.message,
        attempts_remaining: outcome.attempts_remaining,
    };
    Ok(Json(outcome).into_response())
}
