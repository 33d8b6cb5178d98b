use academy_db::util::FlattenTransactionResultExt;
use academy_entity::assessment::attempt::Model as AttemptModel;
use academy_entity::notification::NotificationKind;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::badges::{self, BadgeTrigger};
use crate::notify;
use crate::progress;

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("assessment not found")]
    NotFound,
    #[error("no attempts remaining")]
    NoAttemptsRemaining,
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub struct SubmissionOutcome {
    pub attempt: AttemptModel,
    pub passed: bool,
    pub message: String,
    /// None when the assessment allows unlimited retakes.
    pub attempts_remaining: Option<i32>,
}

/// Records an attempt and, on a pass, credits XP (first pass only), re-runs
/// the completion evaluator for the affected courses and sweeps the badge
/// catalog. Those side effects never fail the submission itself.
pub async fn submit_assessment(
    conn: &DatabaseConnection,
    user_id: Uuid,
    assessment_id: i32,
    score: i32,
    answers: serde_json::Value,
) -> Result<SubmissionOutcome, AssessmentError> {
    let assessment = academy_db::assessment::Query::by_id(conn, assessment_id)
        .await?
        .ok_or(AssessmentError::NotFound)?;

    // `max_retakes` counts attempts after the first; negative means
    // unlimited.
    let allowed = (assessment.max_retakes >= 0).then(|| assessment.max_retakes + 1);
    let used = academy_db::assessment::Query::count_attempts(conn, user_id, assessment_id).await? as i32;
    if let Some(allowed) = allowed {
        if used >= allowed {
            return Err(AssessmentError::NoAttemptsRemaining);
        }
    }

    let passed = score >= assessment.passing_score;
    let first_pass = passed && !academy_db::assessment::Query::passed_exists(conn, user_id, assessment_id).await?;

    let xp = assessment.xp_points;
    let attempt = conn
        .transaction(|txn| {
            Box::pin(async move {
                let attempt =
                    academy_db::assessment::Mutation::record_attempt(txn, user_id, assessment_id, score, passed, answers)
                        .await?;
                if first_pass && xp > 0 {
                    academy_db::user::Mutation::credit_xp(txn, user_id, xp).await?;
                }
                Ok::<_, DbErr>(attempt)
            })
        })
        .await
        .flatten_res()?;

    if passed {
        notify::emit(
            conn,
            user_id,
            NotificationKind::AssessmentPassed,
            "Assessment passed".to_string(),
            format!("You passed \"{}\" with a score of {score}", assessment.title),
            Some(json!({ "assessment_id": assessment_id, "score": score })),
        )
        .await;
        if let Some(unit_id) = assessment.unit_id {
            progress::sync_containing_courses(conn, user_id, unit_id).await;
        }
        if let Some(course_id) = assessment.course_id {
            if let Ok(Some(course)) = academy_db::course::Query::by_id(conn, course_id).await {
                progress::sync_course(conn, user_id, &course).await;
            }
        }
        badges::award_eligible_badges(conn, user_id, BadgeTrigger::AssessmentPassed { score }).await;
    }

    let message = if passed {
        "Assessment passed".to_string()
    } else {
        format!("Score {score} is below the passing score of {}", assessment.passing_score)
    };
    Ok(SubmissionOutcome {
        attempt,
        passed,
        message,
        attempts_remaining: allowed.map(|allowed| allowed - used - 1),
    })
}
