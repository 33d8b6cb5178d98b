mod common;

use academy_core::badges::{self, BadgeTrigger};
use academy_core::{assessments, certificates, progress};
use academy_entity::badge::badge::BadgeKind;
use academy_entity::course::course::CourseType;
use academy_entity::user::Role;
use common::{create_badge, create_course, create_module_tree, create_unit, create_unit_assessment, create_user, setup, xp_of};
use serde_json::json;
use test_log::test;

#[test(tokio::test)]
async fn test_first_pass_awards_assessment_badge_once() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 0, -1).await;
    let badge = create_badge(&conn, BadgeKind::Assessment, 25).await;

    assessments::submit_assessment(&conn, user.id, assessment.id, 80, json!({}))
        .await
        .unwrap();
    assert!(academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());
    assert_eq!(25, xp_of(&conn, user.id).await);

    // A second pass is no longer the first-ever pass and the badge is held.
    assessments::submit_assessment(&conn, user.id, assessment.id, 90, json!({}))
        .await
        .unwrap();
    let earned = academy_db::badge::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(1, earned.len());
    assert_eq!(25, xp_of(&conn, user.id).await);
}

#[test(tokio::test)]
async fn test_perfect_score_awards_both_assessment_badges() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 30, -1).await;
    create_badge(&conn, BadgeKind::Assessment, 25).await;
    create_badge(&conn, BadgeKind::AssessmentPerfect, 50).await;

    assessments::submit_assessment(&conn, user.id, assessment.id, 100, json!({}))
        .await
        .unwrap();

    let earned = academy_db::badge::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(2, earned.len());
    // Assessment XP plus both badge rewards.
    assert_eq!(30 + 25 + 50, xp_of(&conn, user.id).await);
}

#[test(tokio::test)]
async fn test_course_completion_badge_is_awarded_once_globally() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let badge = create_badge(&conn, BadgeKind::CourseCompletion, 40).await;

    for position in 0..2 {
        let course = create_course(&conn, module.id, CourseType::Free, position).await;
        let (_unit, blocks) = create_unit(&conn, course.id, 0, 1).await;
        progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();
    }

    let earned = academy_db::badge::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(1, earned.iter().filter(|(_, b)| b.id == badge.id).count());
}

#[test(tokio::test)]
async fn test_area_badge_requires_every_area_course() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "Abu Dhabi Operations").await;
    let badge = create_badge(&conn, BadgeKind::AreaCompletion, 100).await;

    let first = create_course(&conn, module.id, CourseType::Free, 0).await;
    let second = create_course(&conn, module.id, CourseType::Free, 1).await;
    let (_unit, blocks_first) = create_unit(&conn, first.id, 0, 1).await;
    let (_unit, blocks_second) = create_unit(&conn, second.id, 0, 1).await;

    progress::complete_block(&conn, user.id, blocks_first[0].id).await.unwrap();
    assert!(!academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());

    progress::complete_block(&conn, user.id, blocks_second[0].id).await.unwrap();
    assert!(academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_explorer_badge_needs_five_started_courses() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let badge = create_badge(&conn, BadgeKind::Explorer, 10).await;

    for position in 0..5 {
        let course = create_course(&conn, module.id, CourseType::Free, position).await;
        progress::record_progress(&conn, user.id, course.id, 10, None).await.unwrap();
    }
    assert!(!academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());

    // The sweep only runs on triggers; a block completion re-checks it.
    let course = create_course(&conn, module.id, CourseType::Free, 6).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 1).await;
    progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();
    assert!(academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_master_badge_needs_ten_strong_passes() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 50, 0, -1).await;
    let badge = create_badge(&conn, BadgeKind::AssessmentMaster, 75).await;

    for _ in 0..9 {
        assessments::submit_assessment(&conn, user.id, assessment.id, 90, json!({}))
            .await
            .unwrap();
    }
    assert!(!academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());

    assessments::submit_assessment(&conn, user.id, assessment.id, 90, json!({}))
        .await
        .unwrap();
    assert!(academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_blocks_badge_at_fifty_completions() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 50).await;
    let badge = create_badge(&conn, BadgeKind::Blocks, 60).await;

    for block in &blocks[..49] {
        progress::complete_block(&conn, user.id, block.id).await.unwrap();
    }
    assert!(!academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());

    progress::complete_block(&conn, user.id, blocks[49].id).await.unwrap();
    assert!(academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_certificates_badge_at_five_held() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let badge = create_badge(&conn, BadgeKind::Certificates, 150).await;

    for position in 0..5 {
        let course = create_course(&conn, module.id, CourseType::Free, position).await;
        progress::record_progress(&conn, user.id, course.id, 100, Some(true))
            .await
            .unwrap();
        certificates::generate_certificate(&conn, user.id, course.id).await.unwrap();

        let held = academy_db::badge::Query::held(&conn, user.id, badge.id).await.unwrap();
        assert_eq!(position == 4, held, "after certificate {}", position + 1);
    }
}

#[test(tokio::test)]
async fn test_sweep_skips_badges_already_held() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let badge = create_badge(&conn, BadgeKind::Blocks, 10).await;

    // Hand the badge out, then trigger the sweep that would award it.
    assert!(academy_db::badge::Mutation::award(&conn, user.id, badge.id).await.unwrap());
    badges::award_eligible_badges(&conn, user.id, BadgeTrigger::BlockCompleted).await;

    assert_eq!(0, xp_of(&conn, user.id).await);
    let earned = academy_db::badge::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(1, earned.len());
}
