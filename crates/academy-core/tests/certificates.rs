mod common;

use academy_core::certificates::{self, CertificateError};
use academy_core::progress;
use academy_entity::course::course::CourseType;
use academy_entity::notification::NotificationKind;
use academy_entity::user::Role;
use common::{create_course, create_module_tree, create_unit, create_user, setup};
use test_log::test;

#[test(tokio::test)]
async fn test_certificate_requires_completed_course() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    create_unit(&conn, course.id, 0, 1).await;

    let result = certificates::generate_certificate(&conn, user.id, course.id).await;
    assert!(matches!(result, Err(CertificateError::NotEligible)));
}

#[test(tokio::test)]
async fn test_certificate_is_issued_once() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 1).await;
    progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();

    let first = certificates::generate_certificate(&conn, user.id, course.id).await.unwrap();
    assert!(first.certificate_number.starts_with("VX-"));

    let second = certificates::generate_certificate(&conn, user.id, course.id).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.certificate_number, second.certificate_number);

    let all = academy_db::certificate::Query::for_user(&conn, user.id).await.unwrap();
    assert_eq!(1, all.len());
}

#[test(tokio::test)]
async fn test_certificate_issue_notifies_the_user() {
    let (_db, conn) = setup().await;
    let user = create_user(&conn, Role::User).await;
    let module = create_module_tree(&conn, "General").await;
    let course = create_course(&conn, module.id, CourseType::Free, 0).await;
    let (_unit, blocks) = create_unit(&conn, course.id, 0, 1).await;
    progress::complete_block(&conn, user.id, blocks[0].id).await.unwrap();

    certificates::generate_certificate(&conn, user.id, course.id).await.unwrap();

    let notifications = academy_db::notification::Query::for_user(&conn, user.id).await.unwrap();
    assert!(notifications
        .iter()
        .any(|notification| notification.kind == NotificationKind::CertificateIssued));
}
