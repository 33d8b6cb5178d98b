use academy_db::util::RequireRecord;
use academy_entity::certificate::Model as CertificateModel;
use academy_entity::notification::NotificationKind;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

use crate::badges::{self, BadgeTrigger};
use crate::notify;

#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("course is not completed")]
    NotEligible,
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Issues a certificate for a completed course, or returns the existing one.
/// The lookup-then-insert is a fast path; the unique (user, course) index is
/// the actual idempotence guarantee under concurrent submission.
pub async fn generate_certificate(
    conn: &DatabaseConnection,
    user_id: Uuid,
    course_id: i32,
) -> Result<CertificateModel, CertificateError> {
    if let Some(existing) = academy_db::certificate::Query::get(conn, user_id, course_id).await? {
        return Ok(existing);
    }

    let completed = academy_db::progress::Query::get(conn, user_id, course_id)
        .await?
        .is_some_and(|progress| progress.completed);
    if !completed {
        return Err(CertificateError::NotEligible);
    }

    let number = certificate_number(user_id, course_id);
    let Some(certificate) = academy_db::certificate::Mutation::create(conn, user_id, course_id, number).await?
    else {
        // Lost the race; the winner's row is the certificate.
        let existing = academy_db::certificate::Query::get(conn, user_id, course_id).await.require()?;
        return Ok(existing);
    };

    notify::emit(
        conn,
        user_id,
        NotificationKind::CertificateIssued,
        "Certificate issued".to_string(),
        format!("Certificate {} has been issued", certificate.certificate_number),
        Some(json!({ "course_id": course_id, "certificate_id": certificate.id })),
    )
    .await;
    badges::award_eligible_badges(conn, user_id, BadgeTrigger::CertificateIssued).await;

    Ok(certificate)
}

/// Composite number: practically unique, with the unique index as backstop.
fn certificate_number(user_id: Uuid, course_id: i32) -> String {
    let user = user_id.simple().to_string();
    format!("VX-{}-{}-{}", &user[..8], course_id, Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_number_shape() {
        let user_id = Uuid::new_v4();
        let number = certificate_number(user_id, 17);
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(4, parts.len());
        assert_eq!("VX", parts[0]);
        assert_eq!(8, parts[1].len());
        assert_eq!("17", parts[2]);
        assert!(parts[3].parse::<i64>().is_ok());
    }
}
