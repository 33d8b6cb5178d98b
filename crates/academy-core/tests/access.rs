mod common;

use academy_core::{access, progress};
use academy_entity::course::course::CourseType;
use academy_entity::user::Role;
use common::{create_course, create_module_tree, create_unit, create_user, setup};
use test_log::test;

#[test(tokio::test)]
async fn test_sequential_courses_unlock_in_order() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let first = create_course(&conn, module.id, CourseType::Sequential, 0).await;
    let second = create_course(&conn, module.id, CourseType::Sequential, 1).await;
    let (_unit, blocks) = create_unit(&conn, first.id, 0, 1).await;

    let visible = access::accessible_courses(&conn, user.id, user.role).await.unwrap();
    let ids: Vec<i32> = visible.iter().map(|course| course.id).collect();
    assert!(ids.contains(&first.id));
    assert!(!ids.contains(&second.id));

    progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();

    let visible = access::accessible_courses(&conn, user.id, user.role).await.unwrap();
    let ids: Vec<i32> = visible.iter().map(|course| course.id).collect();
    assert!(ids.contains(&second.id));
}

#[test(tokio::test)]
async fn test_free_courses_are_always_accessible() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    create_course(&conn, module.id, CourseType::Sequential, 0).await;
    let free = create_course(&conn, module.id, CourseType::Free, 1).await;

    let visible = access::accessible_courses(&conn, user.id, user.role).await.unwrap();
    assert!(visible.iter().any(|course| course.id == free.id));
}

#[test(tokio::test)]
async fn test_gating_is_scoped_to_the_module() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module_a = create_module_tree(&conn, "General").await;
    let module_b = create_module_tree(&conn, "Safety").await;
    create_course(&conn, module_a.id, CourseType::Sequential, 0).await;
    let other = create_course(&conn, module_b.id, CourseType::Sequential, 0).await;

    // An incomplete course in module A does not lock module B.
    let visible = access::accessible_courses(&conn, user.id, user.role).await.unwrap();
    assert!(visible.iter().any(|course| course.id == other.id));
}

#[test(tokio::test)]
async fn test_mandatory_courses_bypass_the_gate() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    create_course(&conn, module.id, CourseType::Sequential, 0).await;
    let locked = create_course(&conn, module.id, CourseType::Sequential, 1).await;
    academy_db::course::Mutation::set_mandatory(&conn, locked.id, academy_entity::user::Role::User)
        .await
        .unwrap();

    let visible = access::accessible_courses(&conn, user.id, user.role).await.unwrap();
    assert!(visible.iter().any(|course| course.id == locked.id));
}
