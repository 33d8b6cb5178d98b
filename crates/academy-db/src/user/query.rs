use academy_entity::access_tokens;
use academy_entity::user::{self, Entity as User, Model as UserModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<UserModel>, DbErr> {
        User::find_by_id(user_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to load user");
        })
    }

    pub async fn find_by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<UserModel>, DbErr> {
        let res = access_tokens::Entity::find()
            .filter(access_tokens::Column::AccessToken.eq(token))
            .find_also_related(User)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to look up access token");
            })?;
        Ok(res.and_then(|(_, user)| user))
    }

    pub async fn all<C: ConnectionTrait>(conn: &C) -> Result<Vec<UserModel>, DbErr> {
        User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list users");
            })
    }
}
