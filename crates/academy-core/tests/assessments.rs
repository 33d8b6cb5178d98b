mod common;

use academy_core::assessments::{self, AssessmentError};
use academy_entity::course::course::CourseType;
use academy_entity::user::Role;
use common::{create_course, create_module_tree, create_unit, create_unit_assessment, create_user, setup, xp_of};
use serde_json::json;
use test_log::test;

#[test(tokio::test)]
async fn test_submission_records_attempt_and_passes_on_threshold() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 20, -1).await;

    let outcome = assessments::submit_assessment(&conn, user.id, assessment.id, 70, json!({ "q1": "a" }))
        .await
        .unwrap();
    assert!(outcome.passed);
    assert!(outcome.attempt.passed);
    assert_eq!(70, outcome.attempt.score);
    assert_eq!(None, outcome.attempts_remaining);
    assert_eq!(20, xp_of(&conn, user.id).await);
}

#[test(tokio::test)]
async fn test_failed_submission_credits_nothing() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 20, -1).await;

    let outcome = assessments::submit_assessment(&conn, user.id, assessment.id, 69, json!({}))
        .await
        .unwrap();
    assert!(!outcome.passed);
    assert_eq!(0, xp_of(&conn, user.id).await);

    let attempts = academy_db::assessment::Query::attempts(&conn, user.id, assessment.id)
        .await
        .unwrap();
    assert_eq!(1, attempts.len());
}

#[test(tokio::test)]
async fn test_second_pass_does_not_credit_xp_again() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 20, -1).await;

    assessments::submit_assessment(&conn, user.id, assessment.id, 75, json!({}))
        .await
        .unwrap();
    assessments::submit_assessment(&conn, user.id, assessment.id, 95, json!({}))
        .await
        .unwrap();
    assert_eq!(20, xp_of(&conn, user.id).await);
}

#[test(tokio::test)]
async fn test_retake_limit_is_enforced() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    // One retake: two attempts in total.
    let assessment = create_unit_assessment(&conn, unit.id, 70, 0, 1).await;

    let first = assessments::submit_assessment(&conn, user.id, assessment.id, 10, json!({}))
        .await
        .unwrap();
    assert_eq!(Some(1), first.attempts_remaining);

    let second = assessments::submit_assessment(&conn, user.id, assessment.id, 20, json!({}))
        .await
        .unwrap();
    assert_eq!(Some(0), second.attempts_remaining);

    let third = assessments::submit_assessment(&conn, user.id, assessment.id, 99, json!({})).await;
    assert!(matches!(third, Err(AssessmentError::NoAttemptsRemaining)));
}

#[test(tokio::test)]
async fn test_unknown_assessment_is_rejected() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;

    let result = assessments::submit_assessment(&conn, user.id, 4711, 50, json!({})).await;
    assert!(matches!(result, Err(AssessmentError::NotFound)));
}

#[test(tokio::test)]
async fn test_passing_the_unit_assessment_completes_the_course() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, _) = create_unit(&conn, course.id, 0, 0).await;
    let assessment = create_unit_assessment(&conn, unit.id, 70, 0, -1).await;

    assessments::submit_assessment(&conn, user.id, assessment.id, 85, json!({}))
        .await
        .unwrap();

    let stored = academy_db::progress::Query::get(&conn, user.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.completed);
    assert_eq!(100, stored.percent_complete);
}
