use academy_db::util::FlattenTransactionResultExt;
use academy_entity::badge::badge::{BadgeKind, Model as BadgeModel};
use academy_entity::notification::NotificationKind;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};
use serde_json::json;
use std::collections::HashSet;
use std::error::Error;
use uuid::Uuid;

use crate::notify;

const PERFECT_SCORE: i32 = 100;
const MASTER_MIN_SCORE: i32 = 90;
const MASTER_PASSES: usize = 10;
const EXPLORER_COURSES: u64 = 5;
const BLOCKS_COMPLETED: u64 = 50;
const CERTIFICATES_HELD: u64 = 5;
/// Training areas whose completion earns the area badge, matched by
/// substring on the area name.
const AREA_NEEDLE: &str = "Abu Dhabi";

/// The event that caused a badge sweep. Selects which predicate families
/// are re-evaluated; the predicates themselves always poll full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTrigger {
    AssessmentPassed { score: i32 },
    CourseCompleted { course_id: i32 },
    BlockCompleted,
    CertificateIssued,
}

impl BadgeTrigger {
    fn kinds(self) -> &'static [BadgeKind] {
        match self {
            Self::AssessmentPassed { .. } => &[
                BadgeKind::Assessment,
                BadgeKind::AssessmentPerfect,
                BadgeKind::AssessmentMaster,
                BadgeKind::Explorer,
                BadgeKind::Blocks,
                BadgeKind::Certificates,
            ],
            Self::CourseCompleted { .. } => &[
                BadgeKind::CourseCompletion,
                BadgeKind::AreaCompletion,
                BadgeKind::Explorer,
            ],
            Self::BlockCompleted => &[BadgeKind::Blocks, BadgeKind::Explorer],
            Self::CertificateIssued => &[BadgeKind::Certificates],
        }
    }
}

/// Best-effort sweep over the badge catalog. A failed award must never fail
/// the action that triggered it, so errors end up in the log only.
pub async fn award_eligible_badges(conn: &DatabaseConnection, user_id: Uuid, trigger: BadgeTrigger) {
    if let Err(error) = check_and_award(conn, user_id, trigger).await {
        tracing::error!(error = &error as &dyn Error, %user_id, ?trigger, "badge sweep failed");
    }
}

async fn check_and_award(conn: &DatabaseConnection, user_id: Uuid, trigger: BadgeTrigger) -> Result<(), DbErr> {
    for kind in trigger.kinds() {
        for badge in academy_db::badge::Query::by_kind(conn, *kind).await? {
            if academy_db::badge::Query::held(conn, user_id, badge.id).await? {
                continue;
            }
            if !eligible(conn, user_id, *kind, trigger).await? {
                continue;
            }
            award(conn, user_id, badge).await?;
        }
    }
    Ok(())
}

async fn eligible(
    conn: &DatabaseConnection,
    user_id: Uuid,
    kind: BadgeKind,
    trigger: BadgeTrigger,
) -> Result<bool, DbErr> {
    match kind {
        // First-ever pass: exactly one passed attempt across all assessments.
        BadgeKind::Assessment => {
            let passes = academy_db::assessment::Query::passed_attempts(conn, user_id).await?;
            Ok(passes.len() == 1)
        }
        BadgeKind::AssessmentPerfect => {
            if let BadgeTrigger::AssessmentPassed { score } = trigger {
                if score == PERFECT_SCORE {
                    return Ok(true);
                }
            }
            let passes = academy_db::assessment::Query::passed_attempts(conn, user_id).await?;
            Ok(passes.iter().any(|attempt| attempt.score == PERFECT_SCORE))
        }
        BadgeKind::AssessmentMaster => {
            let passes = academy_db::assessment::Query::passed_attempts(conn, user_id).await?;
            let strong = passes.iter().filter(|attempt| attempt.score >= MASTER_MIN_SCORE).count();
            Ok(strong >= MASTER_PASSES)
        }
        // Awarded once per user, on whichever course completion comes first.
        BadgeKind::CourseCompletion => {
            let completed = academy_db::progress::Query::completed_course_ids(conn, user_id).await?;
            Ok(!completed.is_empty())
        }
        BadgeKind::AreaCompletion => area_completed(conn, user_id).await,
        BadgeKind::Explorer => {
            let started = academy_db::progress::Query::count_started(conn, user_id).await?;
            Ok(started >= EXPLORER_COURSES)
        }
        BadgeKind::Blocks => {
            let blocks = academy_db::unit::Query::count_completed(conn, user_id).await?;
            Ok(blocks >= BLOCKS_COMPLETED)
        }
        BadgeKind::Certificates => {
            let certificates = academy_db::certificate::Query::count_for_user(conn, user_id).await?;
            Ok(certificates >= CERTIFICATES_HELD)
        }
    }
}

/// Every course of every module under the designated training areas is
/// completed, and there is at least one such course.
async fn area_completed(conn: &DatabaseConnection, user_id: Uuid) -> Result<bool, DbErr> {
    let modules = academy_db::course::Query::modules_in_areas_matching(conn, AREA_NEEDLE).await?;
    if modules.is_empty() {
        return Ok(false);
    }
    let completed: HashSet<i32> = academy_db::progress::Query::completed_course_ids(conn, user_id)
        .await?
        .into_iter()
        .collect();
    let mut any = false;
    for module in modules {
        for course in academy_db::course::Query::by_module(conn, module.id).await? {
            any = true;
            if !completed.contains(&course.id) {
                return Ok(false);
            }
        }
    }
    Ok(any)
}

/// One transaction around the award row, the XP credit and the notification,
/// so a crash cannot leave a badge without its XP. The insert races into the
/// (user, badge) primary key; the conflicted loser credits nothing.
async fn award(conn: &DatabaseConnection, user_id: Uuid, badge: BadgeModel) -> Result<(), DbErr> {
    conn.transaction(|txn| {
        Box::pin(async move {
            if !academy_db::badge::Mutation::award(txn, user_id, badge.id).await? {
                return Ok(());
            }
            if badge.xp_points > 0 {
                academy_db::user::Mutation::credit_xp(txn, user_id, badge.xp_points).await?;
            }
            notify::create(
                txn,
                user_id,
                NotificationKind::BadgeEarned,
                "Badge earned".to_string(),
                format!("You earned the \"{}\" badge", badge.name),
                Some(json!({ "badge_id": badge.id })),
            )
            .await?;
            Ok::<_, DbErr>(())
        })
    })
    .await
    .flatten_res()
}
