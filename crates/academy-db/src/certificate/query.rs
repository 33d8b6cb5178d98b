use academy_entity::certificate::{self, Entity as Certificate, Model as CertificateModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .order_by_asc(certificate::Column::IssuedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load certificates");
            })
    }

    pub async fn get<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: i32,
    ) -> Result<Option<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .filter(certificate::Column::CourseId.eq(course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, course_id, "failed to load certificate");
            })
    }

    pub async fn count_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        Certificate::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to count certificates");
            })
    }
}
