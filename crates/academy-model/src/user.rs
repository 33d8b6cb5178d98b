use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SubAdmin,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "trainee@vx.example")]
    pub email: String,
    pub role: Role,
    pub xp_points: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct RoleUpdate {
    pub role: Role,
}

/// The token is returned exactly once, at creation. The server keeps no
/// other representation the client could re-fetch.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedUser {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(r#""admin""#, serde_json::to_string(&Role::Admin).unwrap());
        assert_eq!(r#""sub_admin""#, serde_json::to_string(&Role::SubAdmin).unwrap());
        assert_eq!(r#""user""#, serde_json::to_string(&Role::User).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!("Admin", format!("{}", Role::Admin));
        assert_eq!("SubAdmin", format!("{}", Role::SubAdmin));
    }
}
