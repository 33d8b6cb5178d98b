use academy_entity::certificate::{self, Entity as Certificate, Model as CertificateModel};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, TryInsertResult};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Best-effort insert behind the unique (user, course) index. Returns
    /// `None` when another request won the race; the caller re-fetches the
    /// existing certificate instead of treating the conflict as an error.
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: i32,
        certificate_number: String,
    ) -> Result<Option<CertificateModel>, DbErr> {
        let id = Uuid::new_v4();
        let row = certificate::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(course_id),
            certificate_number: ActiveValue::Set(certificate_number),
            issued_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        let mut on_conflict = OnConflict::columns([certificate::Column::UserId, certificate::Column::CourseId]);
        on_conflict.do_nothing();

        let res = Certificate::insert(row)
            .on_conflict(on_conflict)
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, course_id, "failed to create certificate");
            })?;
        if matches!(res, TryInsertResult::Conflicted) {
            return Ok(None);
        }
        Certificate::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, course_id, "failed to load created certificate");
        })
    }
}
