use academy_entity::user::Model as UserModel;
use academy_entity::user::Role as RoleModel;

use crate::convert::{FromDbModel, FromModel};
use crate::user::{Role, User};

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Admin => Self::Admin,
            RoleModel::SubAdmin => Self::SubAdmin,
            RoleModel::User => Self::User,
        }
    }
}

impl FromModel<Role> for RoleModel {
    fn from_model(model: Role) -> Self {
        match model {
            Role::Admin => Self::Admin,
            Role::SubAdmin => Self::SubAdmin,
            Role::User => Self::User,
        }
    }
}

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: Role::from_db_model(model.role),
            xp_points: model.xp_points,
            created_at: model.created_at,
        }
    }
}
