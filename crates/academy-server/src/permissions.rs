use crate::user::ExtractUser;
use academy_model::user::Role;
use axum::extract::{FromRequestParts, Request};
use axum::response::{IntoResponse, Response};
use axum::RequestExt;
use axum_extra::extract::Cached;
use http::request::Parts;
use http::StatusCode;
use serde_derive::Serialize;
use std::collections::HashSet;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
pub(crate) enum Permission {
    Basic,  // any authenticated user
    Manage, // content authoring, admins and sub-admins
    Admin,  // user administration
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
struct Session {
    permissions: HashSet<Permission>,
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub(crate) struct Permissions(HashSet<Permission>);

impl From<Role> for Permissions {
    fn from(role: Role) -> Self {
        let mut permissions = HashSet::from([Permission::Basic]);
        if matches!(role, Role::Admin | Role::SubAdmin) {
            permissions.insert(Permission::Manage);
        }
        if matches!(role, Role::Admin) {
            permissions.insert(Permission::Admin);
        }
        Self(permissions)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = ExtractUser::from_request_parts(parts, state).await;
        let Ok(ExtractUser(user)) = user else {
            return Ok(Session::default());
        };
        let permissions: Permissions = user.role.into();
        Ok(Session {
            permissions: permissions.0,
        })
    }
}

impl<S> FromRequestParts<S> for Permissions
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Cached::<Session>::from_request_parts(parts, state).await?.0;
        Ok(Self(session.permissions))
    }
}

pub(crate) async fn extract(request: &mut Request) -> Result<HashSet<Permission>, Response> {
    request
        .extract_parts::<Permissions>()
        .await
        .map(|permissions| permissions.0)
        .map_err(IntoResponse::into_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        let admin = Permissions::from(Role::Admin);
        assert!(admin.0.contains(&Permission::Basic));
        assert!(admin.0.contains(&Permission::Manage));
        assert!(admin.0.contains(&Permission::Admin));

        let sub_admin = Permissions::from(Role::SubAdmin);
        assert!(sub_admin.0.contains(&Permission::Manage));
        assert!(!sub_admin.0.contains(&Permission::Admin));

        let user = Permissions::from(Role::User);
        assert!(user.0.contains(&Permission::Basic));
        assert!(!user.0.contains(&Permission::Manage));
    }
}
