#![allow(dead_code)]

use academy_entity::course::course::{CourseType, Model as CourseModel};
use academy_entity::course::module::Model as ModuleModel;
use academy_entity::unit::block::{BlockKind, Model as BlockModel};
use academy_entity::unit::unit::Model as UnitModel;
use academy_entity::user::{Model as UserModel, Role};
use academy_test_helpers::{connect_migrated, SqliteDb};
use sea_orm::DatabaseConnection;

/// Fresh file-backed sqlite with the full schema applied. The returned
/// `SqliteDb` owns the temp dir and must outlive the connection.
pub async fn setup() -> (SqliteDb, DatabaseConnection) {
    let db = SqliteDb::new().unwrap();
    let conn = connect_migrated(&db).await.unwrap();
    (db, conn)
}

pub async fn create_user(conn: &DatabaseConnection, role: Role) -> UserModel {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    academy_db::user::Mutation::create(
        conn,
        "Test Trainee".to_string(),
        format!("trainee-{suffix}@vx.example"),
        role,
    )
    .await
    .unwrap()
}

pub async fn create_module_tree(conn: &DatabaseConnection, area_name: &str) -> ModuleModel {
    let area = academy_db::course::Mutation::create_area(conn, area_name.to_string(), None)
        .await
        .unwrap();
    academy_db::course::Mutation::create_module(conn, area.id, format!("{area_name} basics"), None)
        .await
        .unwrap()
}

pub async fn create_course(
    conn: &DatabaseConnection,
    module_id: i32,
    course_type: CourseType,
    position: i32,
) -> CourseModel {
    academy_db::course::Mutation::create(
        conn,
        module_id,
        format!("Course {position}"),
        None,
        course_type,
        position,
    )
    .await
    .unwrap()
}

/// Creates a unit with `blocks` text blocks worth 10 XP each and attaches it
/// to the course at the given position.
pub async fn create_unit(
    conn: &DatabaseConnection,
    course_id: i32,
    position: i32,
    blocks: usize,
) -> (UnitModel, Vec<BlockModel>) {
    let unit = academy_db::unit::Mutation::create(conn, format!("Unit {position}"), None)
        .await
        .unwrap();
    let mut created = Vec::new();
    for index in 0..blocks {
        let block = academy_db::unit::Mutation::create_block(
            conn,
            unit.id,
            BlockKind::Text,
            format!("Block {index}"),
            index as i32,
            10,
        )
        .await
        .unwrap();
        created.push(block);
    }
    academy_db::course::Mutation::attach_unit(conn, course_id, unit.id, position)
        .await
        .unwrap();
    (unit, created)
}

pub async fn create_unit_assessment(
    conn: &DatabaseConnection,
    unit_id: i32,
    passing_score: i32,
    xp_points: i32,
    max_retakes: i32,
) -> academy_entity::assessment::assessment::Model {
    academy_db::assessment::Mutation::create(
        conn,
        Some(unit_id),
        None,
        "Unit check".to_string(),
        passing_score,
        xp_points,
        max_retakes,
    )
    .await
    .unwrap()
}

pub async fn create_badge(
    conn: &DatabaseConnection,
    kind: academy_entity::badge::badge::BadgeKind,
    xp_points: i32,
) -> academy_entity::badge::badge::Model {
    academy_db::badge::Mutation::create(conn, format!("{kind:?} badge"), None, kind, xp_points)
        .await
        .unwrap()
}

pub async fn xp_of(conn: &DatabaseConnection, user_id: uuid::Uuid) -> i32 {
    academy_db::user::Query::find_by_id(conn, user_id)
        .await
        .unwrap()
        .unwrap()
        .xp_points
}
