//! Conflict-tolerant inserts behave the same on a repeat call.

use academy_entity::badge::badge::BadgeKind;
use academy_entity::course::course::CourseType;
use academy_entity::unit::block::BlockKind;
use academy_entity::user::{Model as UserModel, Role};
use academy_test_helpers::{connect_migrated, SqliteDb};
use sea_orm::DatabaseConnection;
use test_log::test;

async fn setup() -> (SqliteDb, DatabaseConnection) {
    let db = SqliteDb::new().unwrap();
    let conn = connect_migrated(&db).await.unwrap();
    (db, conn)
}

async fn create_user(conn: &DatabaseConnection) -> UserModel {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    academy_db::user::Mutation::create(
        conn,
        "Test Trainee".to_string(),
        format!("trainee-{suffix}@vx.example"),
        Role::User,
    )
    .await
    .unwrap()
}

async fn create_course(conn: &DatabaseConnection) -> i32 {
    let area = academy_db::course::Mutation::create_area(conn, "Area".to_string(), None)
        .await
        .unwrap();
    let module = academy_db::course::Mutation::create_module(conn, area.id, "Module".to_string(), None)
        .await
        .unwrap();
    academy_db::course::Mutation::create(conn, module.id, "Course".to_string(), None, CourseType::Free, 0)
        .await
        .unwrap()
        .id
}

#[test(tokio::test)]
async fn test_block_completion_is_recorded_once() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn).await;
    let unit = academy_db::unit::Mutation::create(&conn, "Unit".to_string(), None)
        .await
        .unwrap();
    let block = academy_db::unit::Mutation::create_block(&conn, unit.id, BlockKind::Text, "Block".to_string(), 0, 10)
        .await
        .unwrap();

    let (first, newly) = academy_db::unit::Mutation::complete_block(&conn, user.id, block.id)
        .await
        .unwrap();
    assert!(newly);

    let (second, newly) = academy_db::unit::Mutation::complete_block(&conn, user.id, block.id)
        .await
        .unwrap();
    assert!(!newly);
    assert_eq!(first.created_at, second.created_at);

    assert_eq!(1, academy_db::unit::Query::count_completed(&conn, user.id).await.unwrap());
}

#[test(tokio::test)]
async fn test_badge_is_awarded_once() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn).await;
    let badge = academy_db::badge::Mutation::create(&conn, "Explorer".to_string(), None, BadgeKind::Explorer, 25)
        .await
        .unwrap();

    assert!(academy_db::badge::Mutation::award(&conn, user.id, badge.id).await.unwrap());
    assert!(!academy_db::badge::Mutation::award(&conn, user.id, badge.id).await.unwrap());

    let held = academy_db::badge::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(1, held.len());
}

#[test(tokio::test)]
async fn test_duplicate_certificate_insert_reports_the_conflict() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn).await;
    let course_id = create_course(&conn).await;

    let first = academy_db::certificate::Mutation::create(&conn, user.id, course_id, "VX-1".to_string())
        .await
        .unwrap();
    assert!(first.is_some());

    let second = academy_db::certificate::Mutation::create(&conn, user.id, course_id, "VX-2".to_string())
        .await
        .unwrap();
    assert!(second.is_none());

    let stored = academy_db::certificate::Query::get(&conn, user.id, course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!("VX-1", stored.certificate_number);
}

#[test(tokio::test)]
async fn test_reattaching_a_unit_moves_it() {
    let (_db, conn) = setup().await;
    let course_id = create_course(&conn).await;
    let first = academy_db::unit::Mutation::create(&conn, "First".to_string(), None)
        .await
        .unwrap();
    let second = academy_db::unit::Mutation::create(&conn, "Second".to_string(), None)
        .await
        .unwrap();
    academy_db::course::Mutation::attach_unit(&conn, course_id, first.id, 0)
        .await
        .unwrap();
    academy_db::course::Mutation::attach_unit(&conn, course_id, second.id, 1)
        .await
        .unwrap();

    // Move the first unit behind the second; no duplicate row appears.
    academy_db::course::Mutation::attach_unit(&conn, course_id, first.id, 2)
        .await
        .unwrap();

    let units = academy_db::course::Query::units(&conn, course_id).await.unwrap();
    let ids: Vec<i32> = units.iter().map(|unit| unit.id).collect();
    assert_eq!(vec![second.id, first.id], ids);
}
