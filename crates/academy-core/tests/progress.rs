mod common;

use academy_core::progress;
use academy_entity::course::course::CourseType;
use academy_entity::user::Role;
use common::{create_course, create_module_tree, create_unit, create_unit_assessment, create_user, setup, xp_of};
use test_log::test;

#[test(tokio::test)]
async fn test_course_without_units_is_never_complete() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;

    let result = progress::evaluate_course_completion(&conn, user.id, course.id)
        .await
        .unwrap();
    assert_eq!(0, result.percent_complete);
    assert!(!result.completed);

    let stored = academy_db::progress::Query::get(&conn, user.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.completed);
}

#[test(tokio::test)]
async fn test_vacuous_unit_counts_as_complete() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    // No blocks and no assessment: informational unit.
    create_unit(&conn, course.id, 0, 0).await;

    let result = progress::evaluate_course_completion(&conn, user.id, course.id)
        .await
        .unwrap();
    assert_eq!(100, result.percent_complete);
    assert!(result.completed);
}

#[test(tokio::test)]
async fn test_percent_reflects_completed_units() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit_a, blocks_a) = create_unit(&conn, course.id, 0, 1).await;
    create_unit(&conn, course.id, 1, 1).await;
    create_unit(&conn, course.id, 2, 1).await;

    progress::complete_block(&conn, user.id, blocks_a[0].id).await.unwrap();

    let result = progress::evaluate_course_completion(&conn, user.id, course.id)
        .await
        .unwrap();
    assert_eq!(33, result.percent_complete);
    assert!(!result.completed);
}

#[test(tokio::test)]
async fn test_unpassed_assessment_holds_the_course_open() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (unit, blocks) = create_unit(&conn, course.id, 0, 1).await;
    create_unit_assessment(&conn, unit.id, 70, 0, -1).await;

    progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();

    let result = progress::evaluate_course_completion(&conn, user.id, course.id)
        .await
        .unwrap();
    assert_eq!(0, result.percent_complete);
    assert!(!result.completed);
}

#[test(tokio::test)]
async fn test_complete_block_is_idempotent_and_credits_xp_once() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 1).await;

    let first = progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();
    assert!(first.newly_completed);
    assert_eq!(10, first.xp_awarded);
    assert_eq!(10, xp_of(&conn, user.id).await);

    let second = progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();
    assert!(!second.newly_completed);
    assert_eq!(0, second.xp_awarded);
    assert_eq!(10, xp_of(&conn, user.id).await);
}

#[test(tokio::test)]
async fn test_complete_block_rejects_unknown_block() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;

    let result = progress::complete_block(&conn, user.id, 4711).await;
    assert!(matches!(result, Err(progress::ProgressError::BlockNotFound)));
}

#[test(tokio::test)]
async fn test_completing_all_blocks_completes_the_course() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 2).await;

    for block in &blocks {
        progress::complete_block(&conn, user.id, block.id).await.unwrap();
    }

    let stored = academy_db::progress::Query::get(&conn, user.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(100, stored.percent_complete);
    assert!(stored.completed);
}

#[test(tokio::test)]
async fn test_record_progress_clamps_percent() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;

    let row = progress::record_progress(&conn, user.id, course.id, 150, None).await.unwrap();
    assert_eq!(100, row.percent_complete);
    assert!(row.completed);

    let row = progress::record_progress(&conn, user.id, course.id, -5, None).await.unwrap();
    assert_eq!(0, row.percent_complete);
    assert!(!row.completed);

    // Marking completed wins over the reported percentage.
    let row = progress::record_progress(&conn, user.id, course.id, 40, Some(true)).await.unwrap();
    assert_eq!(100, row.percent_complete);
    assert!(row.completed);
}
