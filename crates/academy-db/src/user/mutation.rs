use academy_entity::access_tokens;
use academy_entity::user::{self, Entity as User, Model as UserModel, Role};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, IntoActiveValue};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        name: String,
        email: String,
        role: Role,
    ) -> Result<UserModel, DbErr> {
        let user = user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: name.into_active_value(),
            email: email.clone().into_active_value(),
            role: ActiveValue::Set(role),
            xp_points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };
        user.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %email, "failed to create user");
        })
    }

    pub async fn create_token<C: ConnectionTrait>(conn: &C, user_id: Uuid, token: String) -> Result<(), DbErr> {
        let token = access_tokens::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            access_token: ActiveValue::Set(token),
            ..Default::default()
        };
        token.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to create access token");
        })?;
        Ok(())
    }

    pub async fn set_role<C: ConnectionTrait>(conn: &C, user_id: Uuid, role: Role) -> Result<(), DbErr> {
        User::update_many()
            .col_expr(user::Column::Role, Expr::value(role))
            .filter(user::Column::Id.eq(user_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to update user role");
            })?;
        Ok(())
    }

    /// Atomic in-place increment so concurrent credits never lose an update.
    pub async fn credit_xp<C: ConnectionTrait>(conn: &C, user_id: Uuid, points: i32) -> Result<(), DbErr> {
        User::update_many()
            .col_expr(
                user::Column::XpPoints,
                Expr::col(user::Column::XpPoints).add(points),
            )
            .filter(user::Column::Id.eq(user_id))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, points, "failed to credit xp");
            })?;
        Ok(())
    }

    /// Dependent fact rows go with the user via `ON DELETE CASCADE`.
    pub async fn delete<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        let res = User::delete_by_id(user_id).exec(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to delete user");
        })?;
        Ok(res.rows_affected)
    }
}
