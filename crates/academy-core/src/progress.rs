use academy_db::util::FlattenTransactionResultExt;
use academy_entity::course::course::Model as CourseModel;
use academy_entity::notification::NotificationKind;
use academy_entity::progress::Model as ProgressModel;
use academy_entity::unit::block_completion::Model as BlockCompletionModel;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde_json::json;
use std::error::Error;
use uuid::Uuid;

use crate::badges::{self, BadgeTrigger};
use crate::notify;

/// Completion state of one sub-requirement of a unit. A unit without blocks
/// (or without assessments) carries no requirement on that axis, which is
/// distinct from a requirement that is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    NotRequired,
    Pending,
    Satisfied,
}

impl Requirement {
    fn of(total: usize, done: usize) -> Self {
        if total == 0 {
            Self::NotRequired
        } else if done == total {
            Self::Satisfied
        } else {
            Self::Pending
        }
    }

    #[must_use]
    pub fn is_met(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnitStatus {
    pub blocks: Requirement,
    pub assessments: Requirement,
}

impl UnitStatus {
    /// A unit with neither blocks nor assessments is vacuously complete.
    /// Informational units count as done without any user action.
    #[must_use]
    pub fn complete(&self) -> bool {
        self.blocks.is_met() && self.assessments.is_met()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseCompletion {
    pub percent_complete: i32,
    pub completed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("learning block not found")]
    BlockNotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub struct BlockOutcome {
    pub completion: BlockCompletionModel,
    pub newly_completed: bool,
    pub xp_awarded: i32,
}

pub async fn unit_status<C: ConnectionTrait>(conn: &C, user_id: Uuid, unit_id: i32) -> Result<UnitStatus, DbErr> {
    let blocks = academy_db::unit::Query::blocks(conn, unit_id).await?;
    let block_ids: Vec<i32> = blocks.iter().map(|block| block.id).collect();
    let completed_blocks = academy_db::unit::Query::completed_block_ids(conn, user_id, &block_ids).await?;

    let assessments = academy_db::assessment::Query::for_unit(conn, unit_id).await?;
    let mut passed = 0;
    for assessment in &assessments {
        if academy_db::assessment::Query::passed_exists(conn, user_id, assessment.id).await? {
            passed += 1;
        }
    }

    Ok(UnitStatus {
        blocks: Requirement::of(block_ids.len(), completed_blocks.len()),
        assessments: Requirement::of(assessments.len(), passed),
    })
}

/// Recomputes the per-course completion state from the unit requirements and
/// upserts the result into `user_progress`. Any lookup failure aborts the
/// whole evaluation with nothing persisted.
pub async fn evaluate_course_completion<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: i32,
) -> Result<CourseCompletion, DbErr> {
    let units = academy_db::course::Query::units(conn, course_id).await?;
    let total = units.len();

    let mut completed_units = 0;
    for unit in &units {
        if unit_status(conn, user_id, unit.id).await?.complete() {
            completed_units += 1;
        }
    }

    // A course with no units is 0 percent and never complete.
    let result = if total == 0 {
        CourseCompletion {
            percent_complete: 0,
            completed: false,
        }
    } else {
        #[allow(clippy::cast_possible_truncation)]
        let percent = (100.0 * completed_units as f64 / total as f64).round() as i32;
        CourseCompletion {
            percent_complete: percent,
            completed: completed_units == total,
        }
    };

    academy_db::progress::Mutation::upsert(conn, user_id, course_id, result.percent_complete, result.completed)
        .await?;
    Ok(result)
}

/// Direct progress write from the client, bypassing the evaluator. The
/// percentage is clamped, and a row marked completed always reads 100
/// percent regardless of what the client reported.
pub async fn record_progress<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: i32,
    percent_complete: i32,
    completed: Option<bool>,
) -> Result<ProgressModel, DbErr> {
    let percent = percent_complete.clamp(0, 100);
    let completed = completed.unwrap_or(percent == 100);
    let percent = if completed { 100 } else { percent };
    academy_db::progress::Mutation::upsert(conn, user_id, course_id, percent, completed).await
}

/// Marks a block complete for the user. Idempotent: the first call credits
/// the block's XP and fans out to course evaluation and badge checks, a
/// repeat call returns the existing completion and changes nothing.
pub async fn complete_block(
    conn: &DatabaseConnection,
    user_id: Uuid,
    block_id: i32,
) -> Result<BlockOutcome, ProgressError> {
    let block = academy_db::unit::Query::block_by_id(conn, block_id)
        .await?
        .ok_or(ProgressError::BlockNotFound)?;

    let xp = block.xp_points;
    let (completion, newly_completed) = conn
        .transaction(|txn| {
            Box::pin(async move {
                let (completion, newly) = academy_db::unit::Mutation::complete_block(txn, user_id, block_id).await?;
                if newly && xp > 0 {
                    academy_db::user::Mutation::credit_xp(txn, user_id, xp).await?;
                }
                Ok::<_, DbErr>((completion, newly))
            })
        })
        .await
        .flatten_res()?;

    if newly_completed {
        sync_containing_courses(conn, user_id, block.unit_id).await;
        badges::award_eligible_badges(conn, user_id, BadgeTrigger::BlockCompleted).await;
    }

    Ok(BlockOutcome {
        completion,
        newly_completed,
        xp_awarded: if newly_completed { xp } else { 0 },
    })
}

/// Re-evaluates every course containing the unit. Evaluation is downstream
/// of the triggering action, so failures are logged, not propagated.
pub(crate) async fn sync_containing_courses(conn: &DatabaseConnection, user_id: Uuid, unit_id: i32) {
    let courses = match academy_db::course::Query::containing_unit(conn, unit_id).await {
        Ok(courses) => courses,
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, %user_id, unit_id, "course lookup failed");
            return;
        }
    };
    for course in &courses {
        sync_course(conn, user_id, course).await;
    }
}

pub(crate) async fn sync_course(conn: &DatabaseConnection, user_id: Uuid, course: &CourseModel) {
    let was_completed = match academy_db::progress::Query::get(conn, user_id, course.id).await {
        Ok(progress) => progress.is_some_and(|progress| progress.completed),
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, %user_id, course_id = course.id, "progress lookup failed");
            return;
        }
    };
    match evaluate_course_completion(conn, user_id, course.id).await {
        Ok(result) if result.completed && !was_completed => on_course_completed(conn, user_id, course).await,
        Ok(_) => {}
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, %user_id, course_id = course.id, "course evaluation failed");
        }
    }
}

async fn on_course_completed(conn: &DatabaseConnection, user_id: Uuid, course: &CourseModel) {
    notify::emit(
        conn,
        user_id,
        NotificationKind::CourseCompleted,
        "Course completed".to_string(),
        format!("You completed \"{}\"", course.name),
        Some(json!({ "course_id": course.id })),
    )
    .await;
    badges::award_eligible_badges(conn, user_id, BadgeTrigger::CourseCompleted { course_id: course.id }).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_of() {
        assert_eq!(Requirement::NotRequired, Requirement::of(0, 0));
        assert_eq!(Requirement::Pending, Requirement::of(3, 2));
        assert_eq!(Requirement::Satisfied, Requirement::of(3, 3));
    }

    #[test]
    fn test_vacuous_unit_is_complete() {
        let status = UnitStatus {
            blocks: Requirement::NotRequired,
            assessments: Requirement::NotRequired,
        };
        assert!(status.complete());
    }

    #[test]
    fn test_pending_blocks_hold_the_unit_open() {
        let status = UnitStatus {
            blocks: Requirement::Pending,
            assessments: Requirement::Satisfied,
        };
        assert!(!status.complete());
    }
}
